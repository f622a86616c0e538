//! Inbound operator accessor for CLI handlers.

use std::path::Path;
use std::sync::OnceLock;

use crate::error::Result;
use crate::port::inbound::operator::port::OperatorPort;

use super::paths;

static OPERATOR: OnceLock<Box<dyn OperatorPort>> = OnceLock::new();

/// Installs the operator implementation used by CLI handlers.
pub fn install(operator: Box<dyn OperatorPort>) -> std::result::Result<(), Box<dyn OperatorPort>> {
    OPERATOR.set(operator)
}

/// Returns the configured operator capability surface for CLI handlers.
#[must_use]
pub fn operator() -> &'static dyn OperatorPort {
    OPERATOR
        .get()
        .expect("CLI operator not installed; call cli::operator::install from main")
        .as_ref()
}

/// Load config TOML from disk for operator-facing use-cases.
///
/// A missing file at the default location reads as empty, so every section
/// falls back to its defaults. Explicit paths must exist.
pub fn read_config_toml(path: &Path) -> Result<String> {
    if !path.exists() && path == paths::default_config() {
        return Ok(String::new());
    }
    Ok(std::fs::read_to_string(path)?)
}

/// Database override: explicit flag, else the default under the home
/// directory unless the config names one.
pub fn database_override(flag: Option<&Path>, config_toml: &str) -> Result<Option<String>> {
    if let Some(path) = flag {
        return Ok(Some(path.display().to_string()));
    }
    if config_names_database(config_toml) {
        return Ok(None);
    }
    paths::ensure_home_dir()?;
    Ok(Some(paths::default_database().display().to_string()))
}

fn config_names_database(config_toml: &str) -> bool {
    config_toml
        .parse::<toml::Table>()
        .map(|table| table.contains_key("database"))
        .unwrap_or(false)
}
