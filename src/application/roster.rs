//! Roster use cases: registering and deregistering tracked players.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::error::DomainError;
use crate::domain::id::{PlayerId, RiotId};
use crate::domain::player::TrackedPlayer;
use crate::error::Result;
use crate::port::inbound::roster::{Deregistration, Registration, Roster};
use crate::port::outbound::match_api::MatchApi;
use crate::port::outbound::store::RosterStore;

/// Implements [`Roster`] over a roster store and the match API.
pub struct RosterService<S> {
    store: Arc<S>,
    api: Arc<dyn MatchApi>,
}

impl<S: RosterStore> RosterService<S> {
    pub fn new(store: Arc<S>, api: Arc<dyn MatchApi>) -> Self {
        Self { store, api }
    }

    /// Register every id in `riot_ids` under `context`.
    ///
    /// Failures are logged and skipped. Returns how many ids are tracked in
    /// `context` afterwards.
    pub async fn register_all(&self, riot_ids: &[RiotId], context: &str) -> usize {
        let mut tracked = 0;
        for riot_id in riot_ids {
            match self.register_player(riot_id, context).await {
                Ok(_) => tracked += 1,
                Err(err) => warn!(riot_id = %riot_id, error = %err, "Failed to register player"),
            }
        }
        tracked
    }
}

fn checked_context(context: &str) -> Result<&str> {
    let context = context.trim();
    if context.is_empty() {
        return Err(DomainError::EmptyContext.into());
    }
    Ok(context)
}

impl<S: RosterStore> Roster for RosterService<S> {
    async fn register_player(&self, riot_id: &RiotId, context: &str) -> Result<Registration> {
        let context = checked_context(context)?;
        let player_id = self.api.resolve_player(riot_id).await?;

        let added = self
            .store
            .subscribe(&player_id, &riot_id.to_string(), context)
            .await?;
        if added {
            info!(riot_id = %riot_id, puuid = %player_id, context, "Player registered");
            Ok(Registration::Added(player_id))
        } else {
            Ok(Registration::AlreadyTracked(player_id))
        }
    }

    async fn deregister_player(&self, player_id: &PlayerId, context: &str) -> Result<Deregistration> {
        let context = checked_context(context)?;
        let outcome: Deregistration = self.store.unsubscribe(player_id, context).await?.into();
        if outcome != Deregistration::NotTracked {
            info!(puuid = %player_id, context, ?outcome, "Player deregistered");
        }
        Ok(outcome)
    }

    async fn list_tracked(&self) -> Result<Vec<TrackedPlayer>> {
        self.store.list_players().await
    }
}
