use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use riftwatch::domain::game::MatchSummary;
use riftwatch::domain::id::{MatchId, PlayerId, RiotId};
use riftwatch::domain::timeline::{MatchTimeline, TimelineSample};
use riftwatch::error::ApiError;
use riftwatch::port::outbound::match_api::MatchApi;
use tokio::sync::{Notify, Semaphore};
use tokio::time::Instant;

/// Deterministic test double for the match-data API.
///
/// Every response is scripted up front; unscripted calls fail with a 404
/// client error. Calls are counted so tests can assert on fetch volume.
#[derive(Default)]
pub struct ScriptedApi {
    accounts: Mutex<HashMap<String, PlayerId>>,
    latest: Mutex<HashMap<PlayerId, Result<Option<MatchId>, ApiError>>>,
    summaries: Mutex<HashMap<MatchId, Result<MatchSummary, ApiError>>>,
    timelines: Mutex<HashMap<MatchId, Result<MatchTimeline, ApiError>>>,

    latest_calls: AtomicUsize,
    summary_calls: Mutex<HashMap<MatchId, usize>>,
    timeline_calls: AtomicUsize,
    latest_starts: Mutex<Vec<Instant>>,

    latest_delay: Mutex<Duration>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,

    summary_gate: Mutex<Option<Arc<Semaphore>>>,
    summary_entered: Arc<Notify>,
}

impl ScriptedApi {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn account(&self, riot_id: &str, puuid: &str) {
        self.accounts
            .lock()
            .insert(riot_id.to_string(), PlayerId::new(puuid));
    }

    pub fn latest(&self, puuid: &str, match_id: &str) {
        self.latest
            .lock()
            .insert(PlayerId::new(puuid), Ok(Some(MatchId::new(match_id))));
    }

    pub fn no_matches(&self, puuid: &str) {
        self.latest.lock().insert(PlayerId::new(puuid), Ok(None));
    }

    pub fn latest_fails(&self, puuid: &str, err: ApiError) {
        self.latest.lock().insert(PlayerId::new(puuid), Err(err));
    }

    pub fn summary(&self, summary: MatchSummary) {
        self.summaries
            .lock()
            .insert(summary.match_id.clone(), Ok(summary));
    }

    pub fn summary_fails(&self, match_id: &str, err: ApiError) {
        self.summaries.lock().insert(MatchId::new(match_id), Err(err));
    }

    /// Add one participant's positions to the match timeline.
    pub fn timeline(&self, match_id: &str, sample: TimelineSample) {
        let mut timelines = self.timelines.lock();
        let entry = timelines
            .entry(MatchId::new(match_id))
            .or_insert_with(|| Ok(MatchTimeline::default()));
        if let Ok(timeline) = entry {
            timeline.samples.push(sample);
        }
    }

    pub fn timeline_fails(&self, match_id: &str, err: ApiError) {
        self.timelines.lock().insert(MatchId::new(match_id), Err(err));
    }

    /// Make each latest-id call take `delay` so calls overlap.
    pub fn set_latest_delay(&self, delay: Duration) {
        *self.latest_delay.lock() = delay;
    }

    /// Block summary fetches until [`Self::release_summaries`].
    pub fn hold_summaries(&self) {
        *self.summary_gate.lock() = Some(Arc::new(Semaphore::new(0)));
    }

    pub fn release_summaries(&self) {
        if let Some(gate) = self.summary_gate.lock().take() {
            gate.close();
        }
    }

    /// Resolves once a summary fetch has started.
    pub async fn summary_started(&self) {
        self.summary_entered.notified().await;
    }

    pub fn latest_calls(&self) -> usize {
        self.latest_calls.load(Ordering::SeqCst)
    }

    pub fn summary_calls(&self, match_id: &str) -> usize {
        self.summary_calls
            .lock()
            .get(&MatchId::new(match_id))
            .copied()
            .unwrap_or(0)
    }

    pub fn total_summary_calls(&self) -> usize {
        self.summary_calls.lock().values().sum()
    }

    pub fn timeline_calls(&self) -> usize {
        self.timeline_calls.load(Ordering::SeqCst)
    }

    pub fn latest_starts(&self) -> Vec<Instant> {
        self.latest_starts.lock().clone()
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

fn not_found() -> ApiError {
    ApiError::Client {
        status: 404,
        body: "not scripted".into(),
    }
}

#[async_trait]
impl MatchApi for ScriptedApi {
    async fn resolve_player(&self, riot_id: &RiotId) -> Result<PlayerId, ApiError> {
        self.accounts
            .lock()
            .get(&riot_id.to_string())
            .cloned()
            .ok_or_else(not_found)
    }

    async fn latest_match_id(&self, player_id: &PlayerId) -> Result<Option<MatchId>, ApiError> {
        self.latest_calls.fetch_add(1, Ordering::SeqCst);
        self.latest_starts.lock().push(Instant::now());

        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);
        let delay = *self.latest_delay.lock();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        self.latest
            .lock()
            .get(player_id)
            .cloned()
            .unwrap_or_else(|| Err(not_found()))
    }

    async fn match_summary(&self, match_id: &MatchId) -> Result<MatchSummary, ApiError> {
        *self.summary_calls.lock().entry(match_id.clone()).or_default() += 1;
        self.summary_entered.notify_one();

        let gate = self.summary_gate.lock().clone();
        if let Some(gate) = gate {
            let _permit = gate.acquire().await;
        }

        self.summaries
            .lock()
            .get(match_id)
            .cloned()
            .unwrap_or_else(|| Err(not_found()))
    }

    async fn match_timeline(
        &self,
        match_id: &MatchId,
        frames: usize,
    ) -> Result<MatchTimeline, ApiError> {
        self.timeline_calls.fetch_add(1, Ordering::SeqCst);
        self.timelines
            .lock()
            .get(match_id)
            .cloned()
            .unwrap_or_else(|| Err(not_found()))
            .map(|mut timeline| {
                for sample in &mut timeline.samples {
                    sample.positions.truncate(frames);
                }
                timeline
            })
    }

    fn api_name(&self) -> &'static str {
        "scripted"
    }
}
