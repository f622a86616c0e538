//! Roster management for operator-facing adapters.

use async_trait::async_trait;

use crate::domain::player::TrackedPlayer;
use crate::error::Result;
use crate::port::inbound::roster::{Deregistration, Registration};

/// Where the roster lives.
#[derive(Debug, Clone)]
pub struct RosterRequest {
    /// Raw TOML configuration content.
    pub config_toml: String,
    /// Override for database file path.
    pub database_path: Option<String>,
}

/// Roster use-cases for operator-facing adapters.
#[async_trait]
pub trait RosterOperator: Send + Sync {
    /// Resolve `riot_id` and track it in `context`.
    ///
    /// # Errors
    /// Returns an error for malformed or unknown Riot IDs.
    async fn add_player(
        &self,
        request: &RosterRequest,
        riot_id: &str,
        context: &str,
    ) -> Result<Registration>;

    /// Stop tracking a player in `context`.
    ///
    /// `player` is either the Riot ID the player was registered with or
    /// their account id.
    ///
    /// # Errors
    /// Returns [`crate::error::Error::UnknownPlayer`] when nothing matches.
    async fn remove_player(
        &self,
        request: &RosterRequest,
        player: &str,
        context: &str,
    ) -> Result<Deregistration>;

    /// Every tracked player.
    async fn list_players(&self, request: &RosterRequest) -> Result<Vec<TrackedPlayer>>;
}
