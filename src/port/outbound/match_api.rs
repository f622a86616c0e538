//! Match-data API port.

use async_trait::async_trait;

use crate::domain::game::MatchSummary;
use crate::domain::id::{MatchId, PlayerId, RiotId};
use crate::domain::timeline::MatchTimeline;
use crate::error::ApiError;

/// Read access to the external match-data API.
///
/// Implementations own retry and rate-limit handling; an `Err` returned
/// here is final for the current attempt.
#[async_trait]
pub trait MatchApi: Send + Sync {
    /// Resolve a `GameName#TagLine` to its account identifier.
    async fn resolve_player(&self, riot_id: &RiotId) -> Result<PlayerId, ApiError>;

    /// Most recent match for a player, or `None` if they have never played.
    async fn latest_match_id(&self, player_id: &PlayerId) -> Result<Option<MatchId>, ApiError>;

    /// Full result of a completed match.
    async fn match_summary(&self, match_id: &MatchId) -> Result<MatchSummary, ApiError>;

    /// Positions of every participant for the first `frames` timeline frames.
    async fn match_timeline(
        &self,
        match_id: &MatchId,
        frames: usize,
    ) -> Result<MatchTimeline, ApiError>;

    /// Name used in logs.
    fn api_name(&self) -> &'static str;
}
