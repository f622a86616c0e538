//! Watch loop configuration.

use std::time::Duration;

use serde::Deserialize;

/// `[watch]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct WatchConfig {
    /// Seconds between cycle starts. Values under 10 are raised to 10.
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,
    /// Latest-id requests in flight at once.
    #[serde(default = "default_max_concurrency")]
    pub max_concurrency: usize,
    /// Minimum gap between request starts in milliseconds.
    #[serde(default = "default_request_spacing_ms")]
    pub request_spacing_ms: u64,
}

const fn default_interval_secs() -> u64 {
    60
}

const fn default_max_concurrency() -> usize {
    4
}

const fn default_request_spacing_ms() -> u64 {
    50
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            interval_secs: default_interval_secs(),
            max_concurrency: default_max_concurrency(),
            request_spacing_ms: default_request_spacing_ms(),
        }
    }
}

impl WatchConfig {
    #[must_use]
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }

    #[must_use]
    pub fn request_spacing(&self) -> Duration {
        Duration::from_millis(self.request_spacing_ms)
    }
}
