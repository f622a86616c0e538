//! Shared helper routines for operator implementations.

use crate::error::Result;
use crate::infrastructure::config::settings::Config;

/// Parse config and apply a database path override.
pub(super) fn load_config(config_toml: &str, database_path: Option<&str>) -> Result<Config> {
    let mut config = Config::parse_toml(config_toml)?;
    if let Some(path) = database_path {
        config.database = path.to_string();
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_override_replaces_configured_path() {
        let config = load_config("database = \"a.db\"\n", Some("b.db")).unwrap();
        assert_eq!(config.database, "b.db");
        let config = load_config("database = \"a.db\"\n", None).unwrap();
        assert_eq!(config.database, "a.db");
    }
}
