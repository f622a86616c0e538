//! Path utilities for riftwatch.
//!
//! All data lives under `~/.riftwatch/`:
//! - `~/.riftwatch/config.toml` - main configuration
//! - `~/.riftwatch/riftwatch.db` - roster and match state

use std::path::PathBuf;

/// Returns the riftwatch home directory (`~/.riftwatch/`).
pub fn home_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".riftwatch")
}

/// Returns the default config file path (`~/.riftwatch/config.toml`).
pub fn default_config() -> PathBuf {
    home_dir().join("config.toml")
}

/// Returns the default database path (`~/.riftwatch/riftwatch.db`).
pub fn default_database() -> PathBuf {
    home_dir().join("riftwatch.db")
}

/// Ensures the riftwatch home directory exists.
pub fn ensure_home_dir() -> std::io::Result<()> {
    std::fs::create_dir_all(home_dir())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_are_under_riftwatch_home() {
        let home = home_dir();
        assert!(home.to_string_lossy().contains(".riftwatch"));
        assert!(default_config().starts_with(&home));
        assert!(default_database().starts_with(&home));
    }
}
