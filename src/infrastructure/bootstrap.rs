//! Infrastructure bootstrap helpers for runtime wiring.

use std::sync::Arc;

use tracing::{info, warn};

use crate::adapter::outbound::notifier::outbox::OutboxNotifier;
use crate::adapter::outbound::riot::client::RiotClient;
use crate::adapter::outbound::sqlite::database::connection::open;
use crate::adapter::outbound::sqlite::store::SqliteStore;
use crate::application::roster::RosterService;
use crate::application::watch::cycle::{CycleConfig, WatchCycle};
use crate::application::watch::service::WatchService;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::port::outbound::match_api::MatchApi;
use crate::port::outbound::notifier::{LogNotifier, Notifier, NotifierRegistry};

/// Open the SQLite store, creating and migrating the file as needed.
///
/// # Errors
/// Returns an error if the database cannot be opened or migrated.
pub fn open_store(config: &Config) -> Result<Arc<SqliteStore>> {
    let pool = open(&config.database)?;
    Ok(Arc::new(SqliteStore::new(pool)))
}

/// Build the Riot API client.
///
/// # Errors
/// Returns an error if `RIOT_API_KEY` is missing or the base URL is invalid.
pub fn build_match_api(config: &Config) -> Result<Arc<dyn MatchApi>> {
    let client = RiotClient::from_config(&config.riot)?;
    Ok(Arc::new(client))
}

/// Names of the sinks [`build_notifier_registry`] will register.
#[must_use]
pub fn notifier_names(config: &Config) -> Vec<String> {
    let mut names = Vec::new();
    if config.notifications.log {
        names.push("log".to_string());
    }
    if let Some(path) = &config.notifications.outbox_path {
        names.push(format!("outbox ({})", path.display()));
    }
    names
}

/// Build the notifier registry from configuration plus caller-supplied sinks.
///
/// # Errors
/// Returns an error if the outbox file cannot be opened.
pub fn build_notifier_registry(
    config: &Config,
    extra: Vec<Box<dyn Notifier>>,
) -> Result<NotifierRegistry> {
    let mut registry = NotifierRegistry::new();
    if config.notifications.log {
        registry.register(Box::new(LogNotifier));
    }
    if let Some(path) = &config.notifications.outbox_path {
        let outbox = OutboxNotifier::open(path)?;
        info!(path = %path.display(), "Outbox notifier enabled");
        registry.register(Box::new(outbox));
    }
    for notifier in extra {
        registry.register(notifier);
    }
    if registry.is_empty() {
        warn!("No notifiers configured, matches will only be committed");
    }
    Ok(registry)
}

/// Cycle tuning from the `[watch]` and `[analysis]` sections.
#[must_use]
pub fn cycle_config(config: &Config) -> CycleConfig {
    CycleConfig {
        max_concurrency: config.watch.max_concurrency,
        request_spacing: config.watch.request_spacing(),
        bounds: config.analysis.bounds(),
        early_game_frames: config.analysis.early_game_frames,
    }
}

/// Register the configured roster under its context.
///
/// Failures are logged; returns how many ids are tracked afterwards.
///
/// # Errors
/// Returns an error if a configured id is malformed.
pub async fn seed_roster(
    config: &Config,
    store: Arc<SqliteStore>,
    api: Arc<dyn MatchApi>,
) -> Result<usize> {
    let ids = config.roster.parsed_ids()?;
    if ids.is_empty() {
        return Ok(0);
    }
    let roster = RosterService::new(store, api);
    let tracked = roster.register_all(&ids, &config.roster.context).await;
    info!(
        configured = ids.len(),
        tracked,
        context = %config.roster.context,
        "Configured roster registered"
    );
    Ok(tracked)
}

/// Wire a [`WatchService`] from its parts.
#[must_use]
pub fn build_watch_service(
    config: &Config,
    store: Arc<SqliteStore>,
    api: Arc<dyn MatchApi>,
    notifier: Arc<dyn Notifier>,
) -> WatchService<SqliteStore> {
    let cycle = WatchCycle::new(store, api, notifier, cycle_config(config));
    WatchService::new(cycle, config.watch.interval())
}
