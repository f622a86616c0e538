//! Persistence ports for match state and the roster.

use std::collections::BTreeMap;
use std::future::Future;

use crate::domain::id::{MatchId, PlayerId};
use crate::domain::player::TrackedPlayer;
use crate::error::Result;

/// Durable mapping from player to the last match announced for them.
///
/// Every successful write must survive a restart. Unknown players read
/// as `None`.
pub trait MatchStateStore: Send + Sync {
    /// Last committed match for a player.
    fn get_last_seen(
        &self,
        player_id: &PlayerId,
    ) -> impl Future<Output = Result<Option<MatchId>>> + Send;

    /// Set the player's last match to `new` only if it currently equals
    /// `expected` (`None` meaning no entry yet).
    ///
    /// Returns `false` without writing on mismatch. Of two conflicting
    /// concurrent calls at most one succeeds.
    fn compare_and_set(
        &self,
        player_id: &PlayerId,
        expected: Option<&MatchId>,
        new: &MatchId,
    ) -> impl Future<Output = Result<bool>> + Send;

    /// Every stored entry.
    fn list_all(&self) -> impl Future<Output = Result<BTreeMap<PlayerId, MatchId>>> + Send;
}

/// Outcome of dropping one subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unsubscribed {
    /// The player was not subscribed in that context.
    NotSubscribed,
    /// The context was removed; other contexts still track the player.
    Context,
    /// That was the last context; the player and their match state are gone.
    Player,
}

/// Storage operations for tracked players and their subscriptions.
pub trait RosterStore: Send + Sync {
    /// Subscribe a player in `context`, creating the player if needed.
    ///
    /// Returns `false` if the subscription already existed.
    fn subscribe(
        &self,
        player_id: &PlayerId,
        label: &str,
        context: &str,
    ) -> impl Future<Output = Result<bool>> + Send;

    /// Remove one subscription, deleting the player with their last one.
    fn unsubscribe(
        &self,
        player_id: &PlayerId,
        context: &str,
    ) -> impl Future<Output = Result<Unsubscribed>> + Send;

    /// All tracked players with contexts and last-seen match, ordered by id.
    fn list_players(&self) -> impl Future<Output = Result<Vec<TrackedPlayer>>> + Send;
}
