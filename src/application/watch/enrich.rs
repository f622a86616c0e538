//! Turning a fetched match into a notification.

use chrono::{DateTime, Utc};

use crate::domain::game::{MatchSummary, ParticipantResult, Role};
use crate::domain::player::TrackedPlayer;
use crate::domain::side::{Lane, SideStrength};
use crate::port::outbound::notifier::MatchNotification;

/// What to analyze for a side laner: their lane and the participant id of
/// the allied jungler.
///
/// `None` when the match is not eligible (non lane-based queue, or the
/// player was not on a side lane). `Some((lane, None))` when eligible but
/// the team had no jungler.
#[must_use]
pub fn analysis_target(
    summary: &MatchSummary,
    participant: &ParticipantResult,
) -> Option<(Lane, Option<u32>)> {
    if !summary.queue.is_lane_based() {
        return None;
    }
    let lane = participant.role.lane()?;
    let jungler = summary
        .in_role(participant.team, Role::Jungle)
        .map(|j| j.participant_id);
    Some((lane, jungler))
}

/// Assemble the event for one tracked player.
#[must_use]
pub fn build_notification(
    player: &TrackedPlayer,
    summary: &MatchSummary,
    participant: &ParticipantResult,
    side_strength: Option<SideStrength>,
    detected_at: DateTime<Utc>,
) -> MatchNotification {
    MatchNotification {
        player_id: player.player_id.clone(),
        player_label: player.label.clone(),
        contexts: player.contexts.clone(),
        match_id: summary.match_id.clone(),
        queue: summary.queue,
        duration_secs: summary.duration_secs,
        outcome: participant.outcome,
        role: participant.role,
        champion: participant.champion.clone(),
        opponent: summary.opponent_of(participant).map(|o| o.champion.clone()),
        kills: participant.kills,
        deaths: participant.deaths,
        assists: participant.assists,
        stats: participant.stats,
        side_strength,
        detected_at,
    }
}
