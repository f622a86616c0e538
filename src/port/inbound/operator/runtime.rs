//! Runtime control projection types for operator-facing adapters.
//!
//! Defines request and response types for starting the watcher.

use async_trait::async_trait;

use crate::domain::report::CycleReport;
use crate::error::Result;
use crate::port::outbound::notifier::Notifier;

/// Runtime configuration overrides from CLI flags.
#[derive(Debug, Clone, Default)]
pub struct RunRequest {
    /// Raw TOML configuration content.
    pub config_toml: String,

    /// Override for log level (e.g., "debug", "info", "warn").
    pub log_level: Option<String>,

    /// Whether to output logs as JSON.
    pub json_logs: bool,

    /// Override for database file path.
    pub database_path: Option<String>,

    /// Override for seconds between cycles.
    pub interval_secs: Option<u64>,

    /// Run a single cycle and exit.
    pub once: bool,
}

/// Startup information snapshot for display.
#[derive(Debug, Clone)]
pub struct RunStartupSnapshot {
    pub region: String,
    pub database: String,
    /// Interval after clamping.
    pub interval_secs: u64,
    /// Riot IDs registered at start-up.
    pub roster_ids: Vec<String>,
    /// Names of the configured notification sinks.
    pub notifiers: Vec<String>,
    pub api_key_loaded: bool,
}

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// `once` was requested; the report of that cycle.
    SingleCycle(CycleReport),
    /// The loop was stopped by a shutdown signal.
    Stopped,
}

/// Runtime control use-cases for operator-facing adapters.
///
/// # Thread Safety
///
/// Implementations must be thread-safe (`Send + Sync`).
#[async_trait]
pub trait RuntimeOperator: Send + Sync {
    /// Prepare a startup snapshot from runtime overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    fn prepare_run(&self, request: &RunRequest) -> Result<RunStartupSnapshot>;

    /// Run the watcher until stopped (or for one cycle).
    ///
    /// `sinks` receive every notification alongside the configured ones.
    ///
    /// # Errors
    ///
    /// Returns an error if start-up fails.
    async fn execute_run(
        &self,
        request: RunRequest,
        sinks: Vec<Box<dyn Notifier>>,
    ) -> Result<RunOutcome>;
}
