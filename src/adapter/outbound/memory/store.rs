//! In-memory store implementation for testing.

use std::collections::{BTreeMap, BTreeSet};

use parking_lot::RwLock;

use crate::domain::id::{MatchId, PlayerId};
use crate::domain::player::TrackedPlayer;
use crate::error::Result;
use crate::port::outbound::store::{MatchStateStore, RosterStore, Unsubscribed};

#[derive(Debug, Default)]
struct RosterEntry {
    label: String,
    contexts: BTreeSet<String>,
}

/// In-memory store for testing purposes.
///
/// Each operation holds the lock for its whole read-modify-write, which
/// gives compare-and-set the same atomicity as the SQLite store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    last_seen: RwLock<BTreeMap<PlayerId, MatchId>>,
    roster: RwLock<BTreeMap<PlayerId, RosterEntry>>,
}

impl MemoryStore {
    /// Create a new empty memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl MatchStateStore for MemoryStore {
    async fn get_last_seen(&self, player_id: &PlayerId) -> Result<Option<MatchId>> {
        Ok(self.last_seen.read().get(player_id).cloned())
    }

    async fn compare_and_set(
        &self,
        player_id: &PlayerId,
        expected: Option<&MatchId>,
        new: &MatchId,
    ) -> Result<bool> {
        let mut last_seen = self.last_seen.write();
        if last_seen.get(player_id) != expected {
            return Ok(false);
        }
        last_seen.insert(player_id.clone(), new.clone());
        Ok(true)
    }

    async fn list_all(&self) -> Result<BTreeMap<PlayerId, MatchId>> {
        Ok(self.last_seen.read().clone())
    }
}

impl RosterStore for MemoryStore {
    async fn subscribe(&self, player_id: &PlayerId, label: &str, context: &str) -> Result<bool> {
        let mut roster = self.roster.write();
        let entry = roster.entry(player_id.clone()).or_insert_with(|| RosterEntry {
            label: label.to_string(),
            contexts: BTreeSet::new(),
        });
        Ok(entry.contexts.insert(context.to_string()))
    }

    async fn unsubscribe(&self, player_id: &PlayerId, context: &str) -> Result<Unsubscribed> {
        let mut roster = self.roster.write();
        let Some(entry) = roster.get_mut(player_id) else {
            return Ok(Unsubscribed::NotSubscribed);
        };
        if !entry.contexts.remove(context) {
            return Ok(Unsubscribed::NotSubscribed);
        }
        if !entry.contexts.is_empty() {
            return Ok(Unsubscribed::Context);
        }
        roster.remove(player_id);
        self.last_seen.write().remove(player_id);
        Ok(Unsubscribed::Player)
    }

    async fn list_players(&self) -> Result<Vec<TrackedPlayer>> {
        let roster = self.roster.read();
        let last_seen = self.last_seen.read();
        Ok(roster
            .iter()
            .map(|(player_id, entry)| TrackedPlayer {
                player_id: player_id.clone(),
                label: entry.label.clone(),
                last_seen_match_id: last_seen.get(player_id).cloned(),
                contexts: entry.contexts.iter().cloned().collect(),
            })
            .collect())
    }
}
