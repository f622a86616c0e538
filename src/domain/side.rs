//! Side-strength analysis.
//!
//! Classifies a side laner as strongsided or weaksided from where their
//! allied jungler spent the early game. Each sampled jungler position is
//! bucketed as top side, bottom side, or neutral (river and mid), and the
//! lane is strongsided when its own side got at least as many samples as
//! the opposite side.
//!
//! The bucket boundaries are empirical constants for the standard map and
//! are exposed through [`SideBounds`] rather than derived.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::timeline::Position;

/// Midline used to split the map into halves.
pub const DEFAULT_MIDLINE: i32 = 5000;

/// Far edge of the side buckets.
pub const DEFAULT_THRESHOLD: i32 = 10000;

/// Frames 0..=20, roughly the end of the laning phase.
pub const DEFAULT_EARLY_GAME_FRAMES: usize = 21;

/// The two flanks a side laner can play on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lane {
    Top,
    Bottom,
}

/// Map-scale bucket boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SideBounds {
    pub midline: i32,
    pub threshold: i32,
}

impl Default for SideBounds {
    fn default() -> Self {
        Self {
            midline: DEFAULT_MIDLINE,
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl SideBounds {
    fn is_top_side(&self, p: Position) -> bool {
        p.y >= self.midline && p.y > p.x && p.x <= self.threshold
    }

    fn is_bottom_side(&self, p: Position) -> bool {
        p.x >= self.midline && p.x > p.y && p.y <= self.threshold
    }
}

/// Sample counts per bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SideTally {
    pub top: usize,
    pub bottom: usize,
    pub total: usize,
}

impl SideTally {
    /// Count positions into buckets.
    #[must_use]
    pub fn from_positions(positions: &[Position], bounds: SideBounds) -> Self {
        let mut tally = Self {
            total: positions.len(),
            ..Self::default()
        };
        for &p in positions {
            if bounds.is_top_side(p) {
                tally.top += 1;
            } else if bounds.is_bottom_side(p) {
                tally.bottom += 1;
            }
        }
        tally
    }

    #[must_use]
    pub fn top_pct(&self) -> Option<f64> {
        percentage(self.top, self.total)
    }

    #[must_use]
    pub fn bottom_pct(&self) -> Option<f64> {
        percentage(self.bottom, self.total)
    }

    /// Classify `lane` against this tally.
    #[must_use]
    pub fn classify(&self, lane: Lane) -> SideStrength {
        let (Some(top_pct), Some(bot_pct)) = (self.top_pct(), self.bottom_pct()) else {
            return SideStrength::Unavailable;
        };
        let (own, other) = match lane {
            Lane::Top => (self.top, self.bottom),
            Lane::Bottom => (self.bottom, self.top),
        };
        if own >= other {
            SideStrength::Strongsided {
                percent: top_pct.max(bot_pct),
            }
        } else {
            SideStrength::Weaksided {
                percent: top_pct.min(bot_pct),
            }
        }
    }
}

fn percentage(count: usize, total: usize) -> Option<f64> {
    if total == 0 {
        return None;
    }
    let pct = count as f64 / total as f64 * 100.0;
    Some((pct * 100.0).round() / 100.0)
}

/// Result of side-strength analysis for one participant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SideStrength {
    Strongsided { percent: f64 },
    Weaksided { percent: f64 },
    /// Not enough data to say.
    Unavailable,
}

impl SideStrength {
    #[must_use]
    pub fn is_available(&self) -> bool {
        !matches!(self, Self::Unavailable)
    }

    #[must_use]
    pub fn percent(&self) -> Option<f64> {
        match self {
            Self::Strongsided { percent } | Self::Weaksided { percent } => Some(*percent),
            Self::Unavailable => None,
        }
    }
}

impl fmt::Display for SideStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Strongsided { percent } => write!(f, "strongsided ({percent:.2}%)"),
            Self::Weaksided { percent } => write!(f, "weaksided ({percent:.2}%)"),
            Self::Unavailable => f.write_str("unavailable"),
        }
    }
}

/// Analyze the jungler's early-game positions for a side laner.
#[must_use]
pub fn analyze(positions: &[Position], lane: Lane, bounds: SideBounds) -> SideStrength {
    SideTally::from_positions(positions, bounds).classify(lane)
}
