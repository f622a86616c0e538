//! Start-up roster configuration.

use serde::Deserialize;

use crate::domain::id::RiotId;
use crate::error::{ConfigError, Result};

/// Environment variable with comma-separated Riot IDs to track.
pub const RIOT_IDS_ENV: &str = "RIOT_IDS";

/// `[roster]` section: players registered when the watcher starts.
#[derive(Debug, Clone, Deserialize)]
pub struct RosterConfig {
    /// `GameName#TagLine` entries.
    #[serde(default)]
    pub riot_ids: Vec<String>,
    /// Context the seeded players are subscribed under.
    #[serde(default = "default_context")]
    pub context: String,
}

fn default_context() -> String {
    "default".into()
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            riot_ids: Vec::new(),
            context: default_context(),
        }
    }
}

/// Split a comma-separated list, dropping blanks.
///
/// One pair of matching quotes around the whole value is removed first.
#[must_use]
pub fn split_riot_ids(raw: &str) -> Vec<String> {
    let raw = raw.trim();
    let raw = ['"', '\'']
        .into_iter()
        .find_map(|quote| raw.strip_prefix(quote)?.strip_suffix(quote))
        .unwrap_or(raw);
    raw.split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

impl RosterConfig {
    /// Parse every configured id.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidValue`] naming the first malformed id.
    pub fn parsed_ids(&self) -> Result<Vec<RiotId>> {
        self.riot_ids
            .iter()
            .map(|raw| {
                raw.parse::<RiotId>().map_err(|e| {
                    ConfigError::InvalidValue {
                        field: "roster.riot_ids",
                        reason: e.to_string(),
                    }
                    .into()
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_drops_blank_entries() {
        assert_eq!(
            split_riot_ids(" Faker#KR1, ,Caps#EUW "),
            vec!["Faker#KR1".to_string(), "Caps#EUW".to_string()]
        );
    }

    #[test]
    fn surrounding_quotes_are_stripped() {
        let expected = vec!["A#1".to_string(), "B#2".to_string()];
        assert_eq!(split_riot_ids("'A#1,B#2'"), expected);
        assert_eq!(split_riot_ids("\"A#1, B#2\""), expected);
    }

    #[test]
    fn mismatched_quotes_are_kept() {
        assert_eq!(
            split_riot_ids("'A#1,B#2\""),
            vec!["'A#1".to_string(), "B#2\"".to_string()]
        );
    }

    #[test]
    fn malformed_id_is_reported() {
        let config = RosterConfig {
            riot_ids: vec!["Faker#KR1".into(), "nohash".into()],
            ..RosterConfig::default()
        };
        let err = config.parsed_ids().unwrap_err();
        assert!(err.to_string().contains("roster.riot_ids"));
    }
}
