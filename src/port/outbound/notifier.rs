//! Notifier port for match notifications.
//!
//! This module defines the event the watcher emits for every newly
//! completed match and the trait sinks implement to receive it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::game::{AuxiliaryStats, Outcome, QueueType, Role};
use crate::domain::id::{MatchId, PlayerId};
use crate::domain::side::SideStrength;
use crate::error::Result;

/// A tracked player finished a match.
///
/// Delivery is at-least-once: after a crash between hand-off and commit
/// the same `(player_id, match_id)` pair is delivered again, so sinks
/// should use [`MatchNotification::dedup_key`] when duplicates matter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchNotification {
    pub player_id: PlayerId,
    pub player_label: String,
    /// Contexts subscribed to this player.
    pub contexts: Vec<String>,
    pub match_id: MatchId,
    pub queue: QueueType,
    pub duration_secs: u64,
    pub outcome: Outcome,
    pub role: Role,
    pub champion: String,
    /// Champion played by the enemy in the same role, if there was one.
    pub opponent: Option<String>,
    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,
    pub stats: AuxiliaryStats,
    /// Only present for side laners in lane-based queues.
    pub side_strength: Option<SideStrength>,
    pub detected_at: DateTime<Utc>,
}

impl MatchNotification {
    /// Stable key for idempotent delivery.
    #[must_use]
    pub fn dedup_key(&self) -> String {
        format!("{}:{}", self.player_id, self.match_id)
    }

    /// `kills/deaths/assists`.
    #[must_use]
    pub fn kda(&self) -> String {
        format!("{}/{}/{}", self.kills, self.deaths, self.assists)
    }
}

/// Trait for notification sinks.
///
/// # Implementation Notes
///
/// - Implementations must be thread-safe (`Send + Sync`)
/// - `notify` should hand the event off quickly (queue, channel, append)
///   rather than perform slow delivery inline
/// - Returning `Ok` means the event was accepted; the watcher commits the
///   player's new match only after that
pub trait Notifier: Send + Sync {
    /// Accept an event for delivery.
    ///
    /// # Errors
    /// Returns an error if the event could not be handed off.
    fn notify(&self, event: &MatchNotification) -> Result<()>;
}

/// Registry of notifiers (composite pattern).
///
/// Broadcasts events to all registered notifiers.
pub struct NotifierRegistry {
    notifiers: Vec<Box<dyn Notifier>>,
}

impl NotifierRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self { notifiers: vec![] }
    }

    /// Register a notifier.
    pub fn register(&mut self, notifier: Box<dyn Notifier>) {
        self.notifiers.push(notifier);
    }

    /// Number of registered notifiers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.notifiers.len()
    }

    /// Check if registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notifiers.is_empty()
    }
}

impl Default for NotifierRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for NotifierRegistry {
    /// Deliver to every notifier; fails if any of them failed.
    ///
    /// All notifiers are attempted even after a failure, so a retry may
    /// duplicate the event on the ones that succeeded.
    fn notify(&self, event: &MatchNotification) -> Result<()> {
        let mut first_error = None;
        for notifier in &self.notifiers {
            if let Err(err) = notifier.notify(event) {
                first_error.get_or_insert(err);
            }
        }
        first_error.map_or(Ok(()), Err)
    }
}

/// A no-op notifier for testing or when notifications are disabled.
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&self, _event: &MatchNotification) -> Result<()> {
        Ok(())
    }
}

/// A logging notifier that logs events via tracing.
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, event: &MatchNotification) -> Result<()> {
        use tracing::info;
        let side = event
            .side_strength
            .map(|s| s.to_string())
            .unwrap_or_default();
        info!(
            player = %event.player_label,
            match_id = %event.match_id,
            queue = %event.queue,
            outcome = %event.outcome,
            role = event.role.short_label(),
            champion = %event.champion,
            opponent = event.opponent.as_deref().unwrap_or(""),
            kda = %event.kda(),
            side = %side,
            "Match completed"
        );
        Ok(())
    }
}
