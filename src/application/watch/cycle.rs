//! One reconciliation pass over the roster.
//!
//! A cycle moves through these steps:
//!
//! 1. fetch the latest match id of every tracked player (bounded
//!    parallelism, paced request starts)
//! 2. diff against the stored last-seen id: seed unknown players silently,
//!    skip unchanged ones, flag the rest
//! 3. fetch each distinct flagged match once, plus its timeline once when
//!    a side laner needs analysis
//! 4. hand one notification per flagged player to the notifier
//! 5. compare-and-set the new id, only after the notifier accepted
//!
//! Failures are contained per player: a failed fetch, a rejected
//! notification or a store error leaves that player's state untouched so
//! the next cycle retries it.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use futures_util::stream::{self, StreamExt};
use tokio::time::Instant;
use tracing::{debug, info, warn};

use super::cache::CycleCache;
use super::enrich::{analysis_target, build_notification};
use super::pacer::Pacer;
use crate::domain::game::{MatchSummary, ParticipantResult};
use crate::domain::id::MatchId;
use crate::domain::player::TrackedPlayer;
use crate::domain::report::CycleReport;
use crate::domain::side::{self, SideBounds, SideStrength, DEFAULT_EARLY_GAME_FRAMES};
use crate::error::{ApiError, Result};
use crate::port::outbound::match_api::MatchApi;
use crate::port::outbound::notifier::Notifier;
use crate::port::outbound::store::{MatchStateStore, RosterStore};

/// Tuning for a single cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CycleConfig {
    /// Requests in flight at once.
    pub max_concurrency: usize,
    /// Minimum gap between request starts.
    pub request_spacing: Duration,
    pub bounds: SideBounds,
    /// Timeline frames fed to the side-strength analysis.
    pub early_game_frames: usize,
}

impl Default for CycleConfig {
    fn default() -> Self {
        Self {
            max_concurrency: 4,
            request_spacing: Duration::from_millis(50),
            bounds: SideBounds::default(),
            early_game_frames: DEFAULT_EARLY_GAME_FRAMES,
        }
    }
}

struct Flagged {
    player: TrackedPlayer,
    previous: MatchId,
    latest: MatchId,
}

/// Runs cycles against a store, the match API and a notifier.
pub struct WatchCycle<S> {
    store: Arc<S>,
    api: Arc<dyn MatchApi>,
    notifier: Arc<dyn Notifier>,
    config: CycleConfig,
}

impl<S> WatchCycle<S>
where
    S: MatchStateStore + RosterStore,
{
    pub fn new(
        store: Arc<S>,
        api: Arc<dyn MatchApi>,
        notifier: Arc<dyn Notifier>,
        config: CycleConfig,
    ) -> Self {
        Self {
            store,
            api,
            notifier,
            config,
        }
    }

    #[must_use]
    pub fn config(&self) -> &CycleConfig {
        &self.config
    }

    /// Run one cycle to completion.
    ///
    /// # Errors
    /// Only fails if the roster cannot be read; per-player failures are
    /// logged and counted in the report.
    pub async fn run(&self) -> Result<CycleReport> {
        let started = Instant::now();
        let pacer = Pacer::new(self.config.request_spacing);
        let players = self.store.list_players().await?;

        let mut report = CycleReport {
            checked: players.len(),
            ..CycleReport::default()
        };

        let flagged = self.diff(&pacer, players, &mut report).await;

        let mut cache = CycleCache::new();
        self.fetch_details(&pacer, &flagged, &mut cache).await;
        report.detail_fetches = cache.summary_count();

        for entry in flagged {
            self.announce(&pacer, &mut cache, entry, &mut report).await;
        }

        report.duration = started.elapsed();
        info!(
            checked = report.checked,
            seeded = report.seeded,
            unchanged = report.unchanged,
            skipped = report.skipped,
            notified = report.notified,
            undelivered = report.undelivered,
            detail_fetches = report.detail_fetches,
            failed_details = report.failed_details,
            duration_ms = report.duration.as_millis() as u64,
            "Watch cycle finished"
        );
        Ok(report)
    }

    /// Fetch latest ids and sort players into seeded, unchanged and flagged.
    async fn diff(
        &self,
        pacer: &Pacer,
        players: Vec<TrackedPlayer>,
        report: &mut CycleReport,
    ) -> Vec<Flagged> {
        let api = self.api.as_ref();
        let mut latest: Vec<(TrackedPlayer, std::result::Result<Option<MatchId>, ApiError>)> =
            stream::iter(players)
                .map(|player| async move {
                    pacer.wait().await;
                    let result = api.latest_match_id(&player.player_id).await;
                    (player, result)
                })
                .buffer_unordered(self.config.max_concurrency.max(1))
                .collect()
                .await;
        latest.sort_by(|a, b| a.0.player_id.cmp(&b.0.player_id));

        let mut flagged = Vec::new();
        for (player, result) in latest {
            let latest = match result {
                Ok(Some(id)) => id,
                Ok(None) => {
                    debug!(player = %player.label, "No matches on record");
                    report.unchanged += 1;
                    continue;
                }
                Err(err) => {
                    warn!(player = %player.label, error = %err, "Failed to fetch latest match, skipping");
                    report.skipped += 1;
                    continue;
                }
            };

            let stored = match self.store.get_last_seen(&player.player_id).await {
                Ok(stored) => stored,
                Err(err) => {
                    warn!(player = %player.label, error = %err, "Failed to read last match, skipping");
                    report.skipped += 1;
                    continue;
                }
            };

            match stored {
                None => match self.store.compare_and_set(&player.player_id, None, &latest).await {
                    Ok(true) => {
                        info!(player = %player.label, match_id = %latest, "Seeded last match");
                        report.seeded += 1;
                    }
                    Ok(false) => {
                        debug!(player = %player.label, "Seed already written elsewhere");
                        report.unchanged += 1;
                    }
                    Err(err) => {
                        warn!(player = %player.label, error = %err, "Failed to seed last match");
                        report.skipped += 1;
                    }
                },
                Some(previous) if previous == latest => report.unchanged += 1,
                Some(previous) => {
                    debug!(player = %player.label, previous = %previous, latest = %latest, "New match");
                    flagged.push(Flagged {
                        player,
                        previous,
                        latest,
                    });
                }
            }
        }
        flagged
    }

    /// Fetch every distinct flagged match once.
    async fn fetch_details(&self, pacer: &Pacer, flagged: &[Flagged], cache: &mut CycleCache) {
        let mut distinct: Vec<MatchId> = flagged.iter().map(|f| f.latest.clone()).collect();
        distinct.sort();
        distinct.dedup();

        let api = self.api.as_ref();
        let fetched: Vec<(MatchId, std::result::Result<MatchSummary, ApiError>)> =
            stream::iter(distinct)
                .map(|match_id| async move {
                    pacer.wait().await;
                    let result = api.match_summary(&match_id).await;
                    (match_id, result)
                })
                .buffer_unordered(self.config.max_concurrency.max(1))
                .collect()
                .await;

        for (match_id, result) in fetched {
            if let Err(err) = &result {
                warn!(match_id = %match_id, error = %err, "Failed to fetch match detail");
            }
            cache.insert_summary(match_id, result);
        }
    }

    /// Notify for one flagged player and commit on acceptance.
    async fn announce(
        &self,
        pacer: &Pacer,
        cache: &mut CycleCache,
        entry: Flagged,
        report: &mut CycleReport,
    ) {
        let Flagged {
            player,
            previous,
            latest,
        } = entry;

        let summary = match cache.summary(&latest) {
            Some(Ok(summary)) => summary.clone(),
            Some(Err(_)) | None => {
                report.failed_details += 1;
                return;
            }
        };
        let Some(participant) = summary.participant(&player.player_id) else {
            warn!(player = %player.label, match_id = %latest, "Player missing from match participants");
            report.failed_details += 1;
            return;
        };

        let side_strength = self
            .side_strength(pacer, cache, &summary, participant)
            .await;
        let event = build_notification(&player, &summary, participant, side_strength, Utc::now());

        if let Err(err) = self.notifier.notify(&event) {
            warn!(player = %player.label, match_id = %latest, error = %err, "Notification rejected, will retry next cycle");
            report.undelivered += 1;
            return;
        }
        report.notified += 1;

        match self
            .store
            .compare_and_set(&player.player_id, Some(&previous), &latest)
            .await
        {
            Ok(true) => debug!(player = %player.label, match_id = %latest, "Committed last match"),
            Ok(false) => {
                warn!(player = %player.label, match_id = %latest, "Last match changed concurrently, not committed");
            }
            Err(err) => {
                warn!(player = %player.label, match_id = %latest, error = %err, "Failed to commit last match, it will be announced again");
            }
        }
    }

    /// Side strength for eligible side laners, `None` for everyone else.
    async fn side_strength(
        &self,
        pacer: &Pacer,
        cache: &mut CycleCache,
        summary: &MatchSummary,
        participant: &ParticipantResult,
    ) -> Option<SideStrength> {
        let (lane, jungler) = analysis_target(summary, participant)?;
        let Some(jungler) = jungler else {
            debug!(match_id = %summary.match_id, "No allied jungler to analyze");
            return Some(SideStrength::Unavailable);
        };

        if cache.timeline(&summary.match_id).is_none() {
            pacer.wait().await;
            let timeline = match self
                .api
                .match_timeline(&summary.match_id, self.config.early_game_frames)
                .await
            {
                Ok(timeline) => Some(timeline),
                Err(err) => {
                    warn!(match_id = %summary.match_id, error = %err, "Failed to fetch timeline");
                    None
                }
            };
            cache.insert_timeline(summary.match_id.clone(), timeline);
        }

        let sample = cache
            .timeline(&summary.match_id)
            .flatten()
            .and_then(|timeline| timeline.sample(jungler));
        Some(match sample {
            Some(sample) => side::analyze(&sample.positions, lane, self.config.bounds),
            None => SideStrength::Unavailable,
        })
    }
}
