//! Configuration operator implementation.

use crate::application::watch::service::{clamp_interval, MIN_INTERVAL};
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::port::inbound::operator::config::{
    ConfigValidationReport, ConfigView, ConfigurationOperator,
};

use super::entry::Operator;

impl ConfigurationOperator for Operator {
    fn show_config(&self, config_toml: &str) -> Result<ConfigView> {
        let config = Config::parse_toml(config_toml)?;

        Ok(ConfigView {
            database: config.database.clone(),
            log_level: config.logging.level.clone(),
            log_format: config.logging.format.clone(),
            region: config.riot.region.to_string(),
            base_url: config.riot.base_url(),
            api_key_loaded: config.riot.api_key.is_some(),
            interval_secs: config.watch.interval_secs,
            effective_interval_secs: clamp_interval(config.watch.interval()).as_secs(),
            max_concurrency: config.watch.max_concurrency,
            request_spacing_ms: config.watch.request_spacing_ms,
            retry_max_attempts: config.riot.http.retry_max_attempts,
            midline: config.analysis.midline,
            threshold: config.analysis.threshold,
            early_game_frames: config.analysis.early_game_frames,
            log_notifications: config.notifications.log,
            outbox_path: config
                .notifications
                .outbox_path
                .as_ref()
                .map(|p| p.display().to_string()),
            roster_context: config.roster.context.clone(),
            roster_ids: config.roster.riot_ids.clone(),
        })
    }

    fn validate_config(&self, config_toml: &str) -> Result<ConfigValidationReport> {
        let config = Config::parse_toml(config_toml)?;
        let mut warnings = Vec::new();

        if config.riot.api_key.is_none() {
            warnings.push("RIOT_API_KEY not set (required to watch or add players)".to_string());
        }

        if config.watch.interval() < MIN_INTERVAL {
            warnings.push(format!(
                "watch.interval_secs = {} is below the minimum, {} will be used",
                config.watch.interval_secs,
                MIN_INTERVAL.as_secs()
            ));
        }

        if config.roster.riot_ids.is_empty() {
            warnings.push("No roster configured; add players with `riftwatch players add`".to_string());
        }

        if !config.notifications.log && config.notifications.outbox_path.is_none() {
            warnings.push("All notifiers disabled; new matches will be committed silently".to_string());
        }

        Ok(ConfigValidationReport { warnings })
    }
}
