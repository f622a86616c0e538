//! Runtime operator implementation.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::signal;
use tracing::info;

use crate::application::watch::service::MIN_INTERVAL;
use crate::error::Result;
use crate::infrastructure::bootstrap;
use crate::infrastructure::config::settings::Config;
use crate::port::inbound::operator::runtime::{
    RunOutcome, RunRequest, RunStartupSnapshot, RuntimeOperator,
};
use crate::port::outbound::notifier::Notifier;

use super::{entry::Operator, shared};

#[async_trait]
impl RuntimeOperator for Operator {
    fn prepare_run(&self, request: &RunRequest) -> Result<RunStartupSnapshot> {
        let config = Self::load_run_config(request)?;

        Ok(RunStartupSnapshot {
            region: config.riot.region.to_string(),
            database: config.database.clone(),
            interval_secs: config.watch.interval().max(MIN_INTERVAL).as_secs(),
            roster_ids: config.roster.riot_ids.clone(),
            notifiers: bootstrap::notifier_names(&config),
            api_key_loaded: config.riot.api_key.is_some(),
        })
    }

    async fn execute_run(
        &self,
        request: RunRequest,
        sinks: Vec<Box<dyn Notifier>>,
    ) -> Result<RunOutcome> {
        let config = Self::load_run_config(&request)?;
        config.init_logging();

        info!(
            region = %config.riot.region,
            database = %config.database,
            interval_secs = config.watch.interval_secs,
            "riftwatch starting"
        );

        let store = bootstrap::open_store(&config)?;
        let api = bootstrap::build_match_api(&config)?;
        bootstrap::seed_roster(&config, Arc::clone(&store), Arc::clone(&api)).await?;

        let registry = bootstrap::build_notifier_registry(&config, sinks)?;
        let service = bootstrap::build_watch_service(&config, store, api, Arc::new(registry));

        if request.once {
            let report = service.run_once().await?;
            info!("riftwatch stopped");
            return Ok(RunOutcome::SingleCycle(report));
        }

        let handle = service.start();
        signal::ctrl_c().await?;
        info!("Shutdown signal received (Ctrl+C), finishing current cycle");
        handle.shutdown().await?;

        info!("riftwatch stopped");
        Ok(RunOutcome::Stopped)
    }
}

impl Operator {
    fn load_run_config(request: &RunRequest) -> Result<Config> {
        let mut config = shared::load_config(&request.config_toml, request.database_path.as_deref())?;
        Self::apply_run_overrides(&mut config, request);
        Ok(config)
    }

    fn apply_run_overrides(config: &mut Config, request: &RunRequest) {
        if let Some(ref log_level) = request.log_level {
            config.logging.level = log_level.clone();
        }

        if request.json_logs {
            config.logging.format = "json".to_string();
        }

        if let Some(interval_secs) = request.interval_secs {
            config.watch.interval_secs = interval_secs;
        }
    }
}
