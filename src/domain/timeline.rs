//! Per-frame map positions from a match timeline.

use serde::{Deserialize, Serialize};

/// A point on the map in game units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Positions of one participant, one entry per timeline frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimelineSample {
    pub participant_id: u32,
    pub positions: Vec<Position>,
}

impl TimelineSample {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Early-game positions of every participant in one match.
///
/// Only participants present in every sampled frame are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchTimeline {
    pub samples: Vec<TimelineSample>,
}

impl MatchTimeline {
    #[must_use]
    pub fn sample(&self, participant_id: u32) -> Option<&TimelineSample> {
        self.samples
            .iter()
            .find(|s| s.participant_id == participant_id)
    }
}
