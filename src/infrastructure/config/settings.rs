//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//! Configuration is loaded from a TOML file with environment variable overrides
//! for sensitive values like `RIOT_API_KEY`.
//!
//! # Example
//!
//! ```no_run
//! use riftwatch::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::path::Path;

use serde::Deserialize;

use super::analysis::AnalysisConfig;
use super::logging::LoggingConfig;
use super::notifications::NotificationsConfig;
use super::roster::{split_riot_ids, RosterConfig, RIOT_IDS_ENV};
use super::watch::WatchConfig;
use crate::adapter::outbound::riot::settings::RiotConfig;
use crate::error::{ConfigError, Result};

/// Environment variable holding the Riot API key.
pub const RIOT_API_KEY_ENV: &str = "RIOT_API_KEY";

/// Main application configuration.
///
/// Every section is optional; an empty file yields the defaults.
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Path to SQLite database file.
    ///
    /// Defaults to "riftwatch.db" in the current directory.
    #[serde(default = "default_database_path")]
    pub database: String,

    #[serde(default)]
    pub logging: LoggingConfig,

    /// Riot API endpoint and HTTP behaviour.
    ///
    /// The key itself is loaded from `RIOT_API_KEY`.
    #[serde(default)]
    pub riot: RiotConfig,

    #[serde(default)]
    pub watch: WatchConfig,

    #[serde(default)]
    pub analysis: AnalysisConfig,

    #[serde(default)]
    pub notifications: NotificationsConfig,

    #[serde(default)]
    pub roster: RosterConfig,
}

fn default_database_path() -> String {
    "riftwatch.db".to_string()
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// Loads the API key from `RIOT_API_KEY` and, when set, replaces the
    /// configured roster with the comma-separated `RIOT_IDS`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The TOML content is malformed
    /// - Validation fails
    #[allow(clippy::result_large_err)]
    pub fn parse_toml(content: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;

        // Never read from the config file.
        config.riot.api_key = std::env::var(RIOT_API_KEY_ENV)
            .ok()
            .filter(|key| !key.trim().is_empty());

        if let Ok(raw) = std::env::var(RIOT_IDS_ENV) {
            let ids = split_riot_ids(&raw);
            if !ids.is_empty() {
                config.roster.riot_ids = ids;
            }
        }

        config.validate()?;

        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Validate configuration values.
    ///
    /// The watch interval is not rejected when short; the watcher clamps it.
    #[allow(clippy::result_large_err)]
    fn validate(&self) -> Result<()> {
        if self.database.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "database" }.into());
        }
        if !matches!(self.logging.format.as_str(), "pretty" | "json") {
            return Err(ConfigError::InvalidValue {
                field: "logging.format",
                reason: format!("expected \"pretty\" or \"json\", got \"{}\"", self.logging.format),
            }
            .into());
        }

        let http = &self.riot.http;
        if http.timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "riot.http.timeout_ms",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if http.retry_max_attempts == 0 {
            return Err(ConfigError::InvalidValue {
                field: "riot.http.retry_max_attempts",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if http.retry_backoff_max_ms < http.retry_backoff_ms {
            return Err(ConfigError::InvalidValue {
                field: "riot.http.retry_backoff_max_ms",
                reason: "must be >= retry_backoff_ms".to_string(),
            }
            .into());
        }
        if let Some(base_url) = &self.riot.base_url {
            if url::Url::parse(base_url).is_err() {
                return Err(ConfigError::InvalidValue {
                    field: "riot.base_url",
                    reason: format!("not a valid URL: {base_url}"),
                }
                .into());
            }
        }

        if self.watch.max_concurrency == 0 {
            return Err(ConfigError::InvalidValue {
                field: "watch.max_concurrency",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }

        if self.analysis.early_game_frames == 0 {
            return Err(ConfigError::InvalidValue {
                field: "analysis.early_game_frames",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.analysis.threshold < self.analysis.midline {
            return Err(ConfigError::InvalidValue {
                field: "analysis.threshold",
                reason: "must be >= midline".to_string(),
            }
            .into());
        }

        if self.roster.context.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "roster.context",
            }
            .into());
        }
        self.roster.parsed_ids()?;

        Ok(())
    }

    /// Initialize logging from the `[logging]` section.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}
