//! Roster entries.

use serde::{Deserialize, Serialize};

use super::id::{MatchId, PlayerId};

/// A player being watched for new matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackedPlayer {
    pub player_id: PlayerId,
    /// Display label, normally the Riot ID at registration time.
    pub label: String,
    /// Last match the watcher has committed for this player.
    pub last_seen_match_id: Option<MatchId>,
    /// Subscribing contexts (e.g. chat channels) that receive this player's
    /// notifications.
    pub contexts: Vec<String>,
}

impl TrackedPlayer {
    #[must_use]
    pub fn new(player_id: PlayerId, label: impl Into<String>) -> Self {
        Self {
            player_id,
            label: label.into(),
            last_seen_match_id: None,
            contexts: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        let context = context.into();
        if !self.contexts.contains(&context) {
            self.contexts.push(context);
        }
        self
    }
}
