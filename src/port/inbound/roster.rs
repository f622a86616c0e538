//! Roster management port.
//!
//! Consumed by whatever drives registration (the CLI here, a chat-command
//! layer elsewhere). Carries no chat-platform types.

use std::future::Future;

use crate::domain::id::{PlayerId, RiotId};
use crate::domain::player::TrackedPlayer;
use crate::error::Result;
use crate::port::outbound::store::Unsubscribed;

/// Result of a registration request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Registration {
    /// The player is now tracked in the context.
    Added(PlayerId),
    /// The player was already tracked in that context.
    AlreadyTracked(PlayerId),
}

impl Registration {
    #[must_use]
    pub fn player_id(&self) -> &PlayerId {
        match self {
            Self::Added(id) | Self::AlreadyTracked(id) => id,
        }
    }
}

/// Result of a deregistration request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deregistration {
    /// The player was not tracked in that context.
    NotTracked,
    /// Removed from this context; still tracked elsewhere.
    RemovedFromContext,
    /// Removed from the last context and forgotten entirely.
    Forgotten,
}

impl From<Unsubscribed> for Deregistration {
    fn from(outcome: Unsubscribed) -> Self {
        match outcome {
            Unsubscribed::NotSubscribed => Self::NotTracked,
            Unsubscribed::Context => Self::RemovedFromContext,
            Unsubscribed::Player => Self::Forgotten,
        }
    }
}

/// Register, deregister and list tracked players.
pub trait Roster: Send + Sync {
    /// Start tracking a player in `context`.
    ///
    /// The Riot ID is resolved to its account identifier first; unknown
    /// accounts fail with the API's client error.
    fn register_player(
        &self,
        riot_id: &RiotId,
        context: &str,
    ) -> impl Future<Output = Result<Registration>> + Send;

    /// Stop tracking a player in `context`.
    fn deregister_player(
        &self,
        player_id: &PlayerId,
        context: &str,
    ) -> impl Future<Output = Result<Deregistration>> + Send;

    /// Every tracked player.
    fn list_tracked(&self) -> impl Future<Output = Result<Vec<TrackedPlayer>>> + Send;
}
