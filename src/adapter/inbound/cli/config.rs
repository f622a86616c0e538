//! Handler for the `config` command group.

use std::fs;
use std::path::Path;

use crate::adapter::inbound::cli::diagnostic::ConfigError as ConfigDiagnostic;
use crate::adapter::inbound::cli::{operator, output};
use crate::error::{ConfigError, Error, Result};

/// Default config template with documentation.
const CONFIG_TEMPLATE: &str = include_str!("../../../../config.toml.example");

/// Execute `config init`.
pub fn execute_init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(ConfigError::InvalidValue {
            field: "config",
            reason: "file already exists (use --force to overwrite)".to_string(),
        }
        .into());
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, CONFIG_TEMPLATE)?;
    output::section("Config Initialized");
    output::success("Created configuration file");
    output::field("Path", path.display());
    output::section("Next Steps");
    output::note("1. Set RIOT_API_KEY in the environment or a .env file");
    output::note(&format!("2. Run: riftwatch players add <Name#TAG> -c {}", path.display()));
    output::note(&format!("3. Run: riftwatch run -c {}", path.display()));
    Ok(())
}

/// Execute `config show`.
pub fn execute_show(path: &Path) -> Result<()> {
    let config_toml = operator::read_config_toml(path)?;
    let config = with_diagnostic(&config_toml, operator::operator().show_config(&config_toml))?;

    output::section("Effective Configuration");
    output::field("Database", &config.database);
    output::field("Logging", format!("{} ({})", config.log_level, config.log_format));

    output::section("Riot API");
    output::field("Region", &config.region);
    output::field("Base URL", &config.base_url);
    output::field("Attempts", config.retry_max_attempts);
    if config.api_key_loaded {
        output::success("API key loaded from RIOT_API_KEY");
    } else {
        output::warning("API key not set");
    }

    output::section("Watch");
    if config.effective_interval_secs == config.interval_secs {
        output::field("Interval", format!("{}s", config.interval_secs));
    } else {
        output::field(
            "Interval",
            format!(
                "{}s (configured {}s)",
                config.effective_interval_secs, config.interval_secs
            ),
        );
    }
    output::field("Concurrency", config.max_concurrency);
    output::field("Spacing", format!("{}ms", config.request_spacing_ms));

    output::section("Analysis");
    output::field("Midline", config.midline);
    output::field("Threshold", config.threshold);
    output::field("Frames", config.early_game_frames);

    output::section("Notifications");
    output::field("Log", if config.log_notifications { "enabled" } else { "disabled" });
    output::field("Outbox", config.outbox_path.as_deref().unwrap_or("disabled"));

    output::section("Roster");
    output::field("Context", &config.roster_context);
    if config.roster_ids.is_empty() {
        output::note("(no configured players)");
    } else {
        for id in &config.roster_ids {
            output::note(&format!("- {id}"));
        }
    }

    Ok(())
}

/// Execute `config validate`.
pub fn execute_validate(path: &Path) -> Result<()> {
    output::section("Config Validation");
    output::field("Path", path.display());
    let config_toml = operator::read_config_toml(path)?;
    let validation =
        with_diagnostic(&config_toml, operator::operator().validate_config(&config_toml))?;
    output::success("Config file is valid");

    if !validation.warnings.is_empty() {
        output::section("Warnings");
        for warning in &validation.warnings {
            output::warning(warning);
        }
    }

    output::hint(&format!("riftwatch config show -c {}", path.display()));

    Ok(())
}

/// Render TOML syntax errors against the source before returning them.
fn with_diagnostic<T>(config_toml: &str, result: Result<T>) -> Result<T> {
    if let Err(Error::Config(ConfigError::Parse(err))) = &result {
        if !output::is_json() {
            let report = miette::Report::new(ConfigDiagnostic::from_toml(err, config_toml));
            eprintln!("{report:?}");
        }
    }
    result
}
