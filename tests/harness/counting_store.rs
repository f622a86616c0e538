use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use riftwatch::adapter::outbound::memory::store::MemoryStore;
use riftwatch::domain::id::{MatchId, PlayerId};
use riftwatch::domain::player::TrackedPlayer;
use riftwatch::error::Result;
use riftwatch::port::outbound::store::{MatchStateStore, RosterStore, Unsubscribed};

/// [`MemoryStore`] that counts compare-and-set calls, so tests can tell a
/// skipped write from one that stored the same value again.
#[derive(Default)]
pub struct CountingStore {
    inner: MemoryStore,
    compare_and_set_calls: AtomicUsize,
}

impl CountingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn compare_and_set_calls(&self) -> usize {
        self.compare_and_set_calls.load(Ordering::SeqCst)
    }

    /// Forget calls made while arranging a test.
    pub fn reset_counts(&self) {
        self.compare_and_set_calls.store(0, Ordering::SeqCst);
    }
}

impl MatchStateStore for CountingStore {
    async fn get_last_seen(&self, player_id: &PlayerId) -> Result<Option<MatchId>> {
        self.inner.get_last_seen(player_id).await
    }

    async fn compare_and_set(
        &self,
        player_id: &PlayerId,
        expected: Option<&MatchId>,
        new: &MatchId,
    ) -> Result<bool> {
        self.compare_and_set_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.compare_and_set(player_id, expected, new).await
    }

    async fn list_all(&self) -> Result<BTreeMap<PlayerId, MatchId>> {
        self.inner.list_all().await
    }
}

impl RosterStore for CountingStore {
    async fn subscribe(&self, player_id: &PlayerId, label: &str, context: &str) -> Result<bool> {
        self.inner.subscribe(player_id, label, context).await
    }

    async fn unsubscribe(&self, player_id: &PlayerId, context: &str) -> Result<Unsubscribed> {
        self.inner.unsubscribe(player_id, context).await
    }

    async fn list_players(&self) -> Result<Vec<TrackedPlayer>> {
        self.inner.list_players().await
    }
}
