//! Riot REST API response types.

use std::collections::{BTreeMap, HashMap};

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::domain::game::{
    AuxiliaryStats, MatchSummary, Outcome, ParticipantResult, QueueType, Role, TeamSide,
};
use crate::domain::id::{MatchId, PlayerId};
use crate::domain::timeline::{MatchTimeline, Position, TimelineSample};
use crate::error::ApiError;

/// Decode a JSON payload, mapping shape mismatches to [`ApiError::DataShape`].
pub fn decode<T: DeserializeOwned>(value: serde_json::Value) -> Result<T, ApiError> {
    serde_json::from_value(value).map_err(|e| ApiError::DataShape(e.to_string()))
}

/// Response from `account/v1/accounts/by-riot-id`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountDto {
    pub puuid: String,
    #[serde(default)]
    pub game_name: Option<String>,
    #[serde(default)]
    pub tag_line: Option<String>,
}

/// Response from `match/v5/matches/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct MatchDto {
    pub metadata: MatchMetadataDto,
    pub info: MatchInfoDto,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchMetadataDto {
    pub match_id: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchInfoDto {
    pub queue_id: u16,
    pub game_duration: u64,
    pub participants: Vec<ParticipantDto>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantDto {
    pub puuid: String,
    pub participant_id: u32,
    pub team_id: u16,
    #[serde(default)]
    pub riot_id_game_name: Option<String>,
    #[serde(default)]
    pub riot_id_tagline: Option<String>,
    #[serde(default)]
    pub team_position: String,
    pub win: bool,
    #[serde(default)]
    pub game_ended_in_early_surrender: bool,
    pub champion_name: String,
    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,
    #[serde(default)]
    pub champ_level: u32,
    #[serde(default)]
    pub gold_earned: u32,
    #[serde(default)]
    pub total_minions_killed: u32,
    #[serde(default)]
    pub neutral_minions_killed: u32,
    #[serde(default)]
    pub total_damage_dealt_to_champions: u32,
    #[serde(default)]
    pub damage_dealt_to_objectives: u32,
    #[serde(default)]
    pub damage_dealt_to_buildings: u32,
    #[serde(default)]
    pub total_damage_shielded_on_teammates: u32,
    #[serde(default)]
    pub total_heals_on_teammates: u32,
    #[serde(default)]
    pub vision_score: u32,
}

impl ParticipantDto {
    fn label(&self) -> String {
        match (&self.riot_id_game_name, &self.riot_id_tagline) {
            (Some(name), Some(tag)) if !name.is_empty() => format!("{name}#{tag}"),
            _ => self.puuid.clone(),
        }
    }

    fn outcome(&self) -> Outcome {
        if self.game_ended_in_early_surrender {
            Outcome::Drew
        } else if self.win {
            Outcome::Won
        } else {
            Outcome::Lost
        }
    }

    fn stats(&self) -> AuxiliaryStats {
        AuxiliaryStats {
            level: self.champ_level,
            gold: self.gold_earned,
            creep_score: self.total_minions_killed + self.neutral_minions_killed,
            damage_to_champions: self.total_damage_dealt_to_champions,
            damage_to_epic_monsters: self
                .damage_dealt_to_objectives
                .saturating_sub(self.damage_dealt_to_buildings),
            damage_to_structures: self.damage_dealt_to_buildings,
            healing_and_shielding_on_allies: self.total_damage_shielded_on_teammates
                + self.total_heals_on_teammates,
            vision_score: self.vision_score,
        }
    }
}

impl TryFrom<ParticipantDto> for ParticipantResult {
    type Error = ApiError;

    fn try_from(p: ParticipantDto) -> Result<Self, Self::Error> {
        let team = TeamSide::from_team_id(p.team_id).ok_or_else(|| {
            ApiError::DataShape(format!("unknown teamId {} for {}", p.team_id, p.puuid))
        })?;
        Ok(Self {
            label: p.label(),
            outcome: p.outcome(),
            stats: p.stats(),
            role: Role::from_team_position(&p.team_position),
            team,
            participant_id: p.participant_id,
            kills: p.kills,
            deaths: p.deaths,
            assists: p.assists,
            champion: p.champion_name,
            player_id: PlayerId::new(p.puuid),
        })
    }
}

impl TryFrom<MatchDto> for MatchSummary {
    type Error = ApiError;

    fn try_from(dto: MatchDto) -> Result<Self, Self::Error> {
        if dto.info.participants.is_empty() {
            return Err(ApiError::DataShape(format!(
                "match {} has no participants",
                dto.metadata.match_id
            )));
        }
        let participants = dto
            .info
            .participants
            .into_iter()
            .map(ParticipantResult::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            match_id: MatchId::new(dto.metadata.match_id),
            queue: QueueType::from_queue_id(dto.info.queue_id),
            duration_secs: dto.info.game_duration,
            participants,
        })
    }
}

/// Response from `match/v5/matches/{id}/timeline`.
#[derive(Debug, Clone, Deserialize)]
pub struct TimelineDto {
    pub info: TimelineInfoDto,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TimelineInfoDto {
    pub frames: Vec<FrameDto>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameDto {
    /// Keyed by participant id as a string (`"1"`..`"10"`).
    pub participant_frames: HashMap<String, ParticipantFrameDto>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ParticipantFrameDto {
    pub position: PositionDto,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PositionDto {
    pub x: i32,
    pub y: i32,
}

impl TimelineDto {
    /// Positions of every participant over the first `frames` frames.
    ///
    /// A participant missing from any of those frames is left out.
    ///
    /// # Errors
    /// Returns [`ApiError::DataShape`] if a participant key is not numeric.
    pub fn into_timeline(self, frames: usize) -> Result<MatchTimeline, ApiError> {
        let mut tracks: BTreeMap<u32, Vec<Position>> = BTreeMap::new();
        let mut sampled = 0;
        for frame in self.info.frames.into_iter().take(frames) {
            sampled += 1;
            for (key, entry) in frame.participant_frames {
                let participant_id: u32 = key.parse().map_err(|_| {
                    ApiError::DataShape(format!("participant key {key:?} is not numeric"))
                })?;
                tracks
                    .entry(participant_id)
                    .or_default()
                    .push(Position::new(entry.position.x, entry.position.y));
            }
        }

        let samples = tracks
            .into_iter()
            .filter(|(_, positions)| positions.len() == sampled)
            .map(|(participant_id, positions)| TimelineSample {
                participant_id,
                positions,
            })
            .collect();
        Ok(MatchTimeline { samples })
    }
}
