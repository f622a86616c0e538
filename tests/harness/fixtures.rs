use riftwatch::domain::game::{
    AuxiliaryStats, MatchSummary, Outcome, ParticipantResult, QueueType, Role, TeamSide,
};
use riftwatch::domain::id::{MatchId, PlayerId};
use riftwatch::domain::timeline::{Position, TimelineSample};

/// Participant line with sensible defaults.
pub fn participant(
    puuid: &str,
    participant_id: u32,
    team: TeamSide,
    role: Role,
    champion: &str,
) -> ParticipantResult {
    ParticipantResult {
        player_id: PlayerId::new(puuid),
        label: format!("{puuid}#TEST"),
        participant_id,
        team,
        role,
        outcome: if team == TeamSide::Blue {
            Outcome::Won
        } else {
            Outcome::Lost
        },
        champion: champion.to_string(),
        kills: 3,
        deaths: 1,
        assists: 7,
        stats: AuxiliaryStats {
            level: 16,
            gold: 11_000,
            creep_score: 180,
            ..AuxiliaryStats::default()
        },
    }
}

/// Ranked match with a blue top laner (`top`, id 1), blue jungler (id 2),
/// blue support `support` (id 5), a red top laner (`red-top`, id 6) and a
/// red jungler (id 7).
pub fn ranked_match(match_id: &str, top: &str, support: &str) -> MatchSummary {
    MatchSummary {
        match_id: MatchId::new(match_id),
        queue: QueueType::RankedSolo,
        duration_secs: 1_800,
        participants: vec![
            participant(top, 1, TeamSide::Blue, Role::Top, "Garen"),
            participant("blue-jungle", 2, TeamSide::Blue, Role::Jungle, "Lee Sin"),
            participant(support, 5, TeamSide::Blue, Role::Support, "Lulu"),
            participant("red-top", 6, TeamSide::Red, Role::Top, "Darius"),
            participant("red-jungle", 7, TeamSide::Red, Role::Jungle, "Vi"),
        ],
    }
}

/// ARAM match; nobody is eligible for side analysis.
pub fn aram_match(match_id: &str, puuid: &str) -> MatchSummary {
    MatchSummary {
        match_id: MatchId::new(match_id),
        queue: QueueType::Aram,
        duration_secs: 1_000,
        participants: vec![participant(puuid, 1, TeamSide::Red, Role::None, "Sona")],
    }
}

/// `top` top-side samples, `bottom` bottom-side samples, the rest neutral.
pub fn jungler_sample(participant_id: u32, top: usize, bottom: usize, total: usize) -> TimelineSample {
    let mut positions = Vec::with_capacity(total);
    positions.extend(std::iter::repeat(Position::new(2_000, 9_000)).take(top));
    positions.extend(std::iter::repeat(Position::new(9_000, 2_000)).take(bottom));
    positions.extend(std::iter::repeat(Position::new(7_000, 7_000)).take(total - top - bottom));
    TimelineSample {
        participant_id,
        positions,
    }
}
