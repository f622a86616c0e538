//! Roster operator implementation.

use async_trait::async_trait;

use crate::application::roster::RosterService;
use crate::domain::error::DomainError;
use crate::domain::id::RiotId;
use crate::domain::player::TrackedPlayer;
use crate::error::{Error, Result};
use crate::infrastructure::bootstrap;
use crate::port::inbound::operator::roster::{RosterOperator, RosterRequest};
use crate::port::inbound::roster::{Deregistration, Registration, Roster};
use crate::port::outbound::store::RosterStore;

use super::{entry::Operator, shared};

#[async_trait]
impl RosterOperator for Operator {
    async fn add_player(
        &self,
        request: &RosterRequest,
        riot_id: &str,
        context: &str,
    ) -> Result<Registration> {
        let riot_id: RiotId = riot_id.parse()?;
        let config = shared::load_config(&request.config_toml, request.database_path.as_deref())?;
        let store = bootstrap::open_store(&config)?;
        let api = bootstrap::build_match_api(&config)?;

        RosterService::new(store, api)
            .register_player(&riot_id, context)
            .await
    }

    async fn remove_player(
        &self,
        request: &RosterRequest,
        player: &str,
        context: &str,
    ) -> Result<Deregistration> {
        let context = context.trim();
        if context.is_empty() {
            return Err(DomainError::EmptyContext.into());
        }
        let config = shared::load_config(&request.config_toml, request.database_path.as_deref())?;
        let store = bootstrap::open_store(&config)?;

        let tracked = store.list_players().await?;
        let target = find_player(&tracked, player)
            .ok_or_else(|| Error::UnknownPlayer(player.trim().to_string()))?;

        Ok(store.unsubscribe(&target.player_id, context).await?.into())
    }

    async fn list_players(&self, request: &RosterRequest) -> Result<Vec<TrackedPlayer>> {
        let config = shared::load_config(&request.config_toml, request.database_path.as_deref())?;
        let store = bootstrap::open_store(&config)?;
        store.list_players().await
    }
}

/// Match by registered Riot ID (case-insensitive) first, then by account id.
fn find_player<'a>(tracked: &'a [TrackedPlayer], needle: &str) -> Option<&'a TrackedPlayer> {
    let needle = needle.trim();
    tracked
        .iter()
        .find(|p| p.label.eq_ignore_ascii_case(needle))
        .or_else(|| tracked.iter().find(|p| p.player_id.as_str() == needle))
}
