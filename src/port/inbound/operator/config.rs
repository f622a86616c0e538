//! Configuration projections for operator-facing adapters.

use crate::error::Result;

/// Effective configuration, with defaults applied, for display.
#[derive(Debug, Clone)]
pub struct ConfigView {
    pub database: String,
    pub log_level: String,
    pub log_format: String,
    pub region: String,
    pub base_url: String,
    pub api_key_loaded: bool,
    pub interval_secs: u64,
    /// Interval the watcher will actually use after clamping.
    pub effective_interval_secs: u64,
    pub max_concurrency: usize,
    pub request_spacing_ms: u64,
    pub retry_max_attempts: u32,
    pub midline: i32,
    pub threshold: i32,
    pub early_game_frames: usize,
    pub log_notifications: bool,
    pub outbox_path: Option<String>,
    pub roster_context: String,
    pub roster_ids: Vec<String>,
}

/// Non-fatal findings from validation.
#[derive(Debug, Clone, Default)]
pub struct ConfigValidationReport {
    pub warnings: Vec<String>,
}

/// Configuration use-cases for operator-facing adapters.
pub trait ConfigurationOperator: Send + Sync {
    /// Build a projection for `check config`.
    fn show_config(&self, config_toml: &str) -> Result<ConfigView>;

    /// Validate config and return non-fatal warnings.
    fn validate_config(&self, config_toml: &str) -> Result<ConfigValidationReport>;
}
