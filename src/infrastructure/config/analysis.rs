//! Side-strength analysis configuration.

use serde::Deserialize;

use crate::domain::side::{
    SideBounds, DEFAULT_EARLY_GAME_FRAMES, DEFAULT_MIDLINE, DEFAULT_THRESHOLD,
};

/// `[analysis]` section. Defaults fit the standard map.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct AnalysisConfig {
    #[serde(default = "default_midline")]
    pub midline: i32,
    #[serde(default = "default_threshold")]
    pub threshold: i32,
    /// Timeline frames sampled, starting at frame 0.
    #[serde(default = "default_early_game_frames")]
    pub early_game_frames: usize,
}

const fn default_midline() -> i32 {
    DEFAULT_MIDLINE
}

const fn default_threshold() -> i32 {
    DEFAULT_THRESHOLD
}

const fn default_early_game_frames() -> usize {
    DEFAULT_EARLY_GAME_FRAMES
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            midline: default_midline(),
            threshold: default_threshold(),
            early_game_frames: default_early_game_frames(),
        }
    }
}

impl AnalysisConfig {
    #[must_use]
    pub fn bounds(&self) -> SideBounds {
        SideBounds {
            midline: self.midline,
            threshold: self.threshold,
        }
    }
}
