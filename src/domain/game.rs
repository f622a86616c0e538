//! Completed match summaries.
//!
//! Queue, team, role and outcome are closed enumerations with a single
//! canonical mapping from the API's raw codes.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::id::{MatchId, PlayerId};
use super::side::Lane;

/// Game queue a match was played in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QueueType {
    DraftPick,
    RankedSolo,
    RankedFlex,
    Aram,
    Quickplay,
    Clash,
    AramClash,
    AllRandomUrf,
    Arena,
    PickUrf,
    AramMayhem,
    /// A queue id without a known name.
    Other(u16),
}

impl QueueType {
    /// Map a raw `queueId` to its queue.
    #[must_use]
    pub const fn from_queue_id(id: u16) -> Self {
        match id {
            400 => Self::DraftPick,
            420 => Self::RankedSolo,
            440 => Self::RankedFlex,
            450 => Self::Aram,
            490 => Self::Quickplay,
            700 => Self::Clash,
            720 => Self::AramClash,
            900 => Self::AllRandomUrf,
            1710 => Self::Arena,
            1900 => Self::PickUrf,
            2400 => Self::AramMayhem,
            other => Self::Other(other),
        }
    }

    /// Whether players are assigned lanes in this queue.
    #[must_use]
    pub const fn is_lane_based(self) -> bool {
        matches!(
            self,
            Self::DraftPick | Self::RankedSolo | Self::RankedFlex | Self::Quickplay | Self::Clash
        )
    }

    #[must_use]
    pub fn label(self) -> String {
        match self {
            Self::DraftPick => "Draft Pick".into(),
            Self::RankedSolo => "Ranked Solo/Duo".into(),
            Self::RankedFlex => "Ranked Flex".into(),
            Self::Aram => "ARAM".into(),
            Self::Quickplay => "Quickplay".into(),
            Self::Clash => "SR Clash".into(),
            Self::AramClash => "ARAM Clash".into(),
            Self::AllRandomUrf => "ARURF".into(),
            Self::Arena => "Arena".into(),
            Self::PickUrf => "Pick URF".into(),
            Self::AramMayhem => "ARAM: Mayhem".into(),
            Self::Other(id) => format!("Queue {id}"),
        }
    }
}

impl fmt::Display for QueueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Which of the two teams a participant played on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeamSide {
    Blue,
    Red,
}

impl TeamSide {
    /// Map a raw `teamId` (100 or 200).
    #[must_use]
    pub const fn from_team_id(id: u16) -> Option<Self> {
        match id {
            100 => Some(Self::Blue),
            200 => Some(Self::Red),
            _ => None,
        }
    }
}

/// Assigned position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Top,
    Jungle,
    Middle,
    Bottom,
    Support,
    /// Queues without positions (ARAM, Arena, URF...).
    None,
}

impl Role {
    /// Map a raw `teamPosition` string.
    #[must_use]
    pub fn from_team_position(position: &str) -> Self {
        match position {
            "TOP" => Self::Top,
            "JUNGLE" => Self::Jungle,
            "MIDDLE" => Self::Middle,
            "BOTTOM" => Self::Bottom,
            "UTILITY" => Self::Support,
            _ => Self::None,
        }
    }

    /// The flank this role plays on, for side lanes only.
    #[must_use]
    pub const fn lane(self) -> Option<Lane> {
        match self {
            Self::Top => Some(Lane::Top),
            Self::Bottom => Some(Lane::Bottom),
            _ => None,
        }
    }

    #[must_use]
    pub const fn short_label(self) -> &'static str {
        match self {
            Self::Top => "TOP",
            Self::Jungle => "JG",
            Self::Middle => "MID",
            Self::Bottom => "BOT",
            Self::Support => "SUPP",
            Self::None => "",
        }
    }
}

/// How the match ended for a participant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Won,
    Lost,
    /// Early surrender (remake); nobody is credited.
    Drew,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Won => "won",
            Self::Lost => "lost",
            Self::Drew => "drew",
        })
    }
}

/// Secondary per-participant numbers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuxiliaryStats {
    pub level: u32,
    pub gold: u32,
    /// Lane minions plus neutral monsters. Ward kills are not creep and
    /// are left out.
    pub creep_score: u32,
    pub damage_to_champions: u32,
    pub damage_to_epic_monsters: u32,
    pub damage_to_structures: u32,
    pub healing_and_shielding_on_allies: u32,
    pub vision_score: u32,
}

/// One participant's line in a completed match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantResult {
    pub player_id: PlayerId,
    pub label: String,
    /// Index used by the timeline endpoint (1..=10).
    pub participant_id: u32,
    pub team: TeamSide,
    pub role: Role,
    pub outcome: Outcome,
    pub champion: String,
    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,
    pub stats: AuxiliaryStats,
}

/// A completed match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub match_id: MatchId,
    pub queue: QueueType,
    pub duration_secs: u64,
    pub participants: Vec<ParticipantResult>,
}

impl MatchSummary {
    /// Find a player's line.
    #[must_use]
    pub fn participant(&self, player_id: &PlayerId) -> Option<&ParticipantResult> {
        self.participants.iter().find(|p| &p.player_id == player_id)
    }

    /// Find whoever played `role` for `team`.
    #[must_use]
    pub fn in_role(&self, team: TeamSide, role: Role) -> Option<&ParticipantResult> {
        if role == Role::None {
            return None;
        }
        self.participants
            .iter()
            .find(|p| p.team == team && p.role == role)
    }

    /// The enemy who played the same role as `participant`.
    #[must_use]
    pub fn opponent_of(&self, participant: &ParticipantResult) -> Option<&ParticipantResult> {
        let enemy = match participant.team {
            TeamSide::Blue => TeamSide::Red,
            TeamSide::Red => TeamSide::Blue,
        };
        self.in_role(enemy, participant.role)
    }
}
