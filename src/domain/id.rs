//! Domain identifier types with proper encapsulation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::DomainError;

/// Opaque account identifier (PUUID), stable across display-name changes.
///
/// The inner String is private to ensure all construction goes through
/// the defined constructors.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(String);

impl PlayerId {
    /// Create a new `PlayerId` from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the player ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for PlayerId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for PlayerId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Match identifier, e.g. `NA1_5012345678`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MatchId(String);

impl MatchId {
    /// Create a new `MatchId` from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the match ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for MatchId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for MatchId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Human-facing account name in `GameName#TagLine` form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RiotId {
    game_name: String,
    tag_line: String,
}

impl RiotId {
    /// Build a Riot ID from its two halves.
    ///
    /// # Errors
    /// Returns [`DomainError::InvalidRiotId`] if either half is blank.
    pub fn try_new(
        game_name: impl Into<String>,
        tag_line: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let game_name = game_name.into().trim().to_string();
        let tag_line = tag_line.into().trim().to_string();
        if game_name.is_empty() || tag_line.is_empty() {
            return Err(DomainError::InvalidRiotId {
                value: format!("{game_name}#{tag_line}"),
            });
        }
        Ok(Self {
            game_name,
            tag_line,
        })
    }

    #[must_use]
    pub fn game_name(&self) -> &str {
        &self.game_name
    }

    #[must_use]
    pub fn tag_line(&self) -> &str {
        &self.tag_line
    }
}

impl FromStr for RiotId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split('#');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(name), Some(tag), None) => Self::try_new(name, tag),
            _ => Err(DomainError::InvalidRiotId {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for RiotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.game_name, self.tag_line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn riot_id_parses_name_and_tag() {
        let id: RiotId = "Faker#KR1".parse().unwrap();
        assert_eq!(id.game_name(), "Faker");
        assert_eq!(id.tag_line(), "KR1");
        assert_eq!(id.to_string(), "Faker#KR1");
    }

    #[test]
    fn riot_id_keeps_inner_spaces() {
        let id: RiotId = " Hide on bush #KR1 ".parse().unwrap();
        assert_eq!(id.game_name(), "Hide on bush");
        assert_eq!(id.tag_line(), "KR1");
    }

    #[test]
    fn riot_id_rejects_missing_or_extra_separators() {
        for raw in ["Faker", "Faker#", "#KR1", "a#b#c", ""] {
            let result: Result<RiotId, _> = raw.parse();
            assert!(
                matches!(result, Err(DomainError::InvalidRiotId { .. })),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn ids_order_and_display_as_strings() {
        let a = PlayerId::new("a-puuid");
        let b = PlayerId::from("b-puuid");
        assert!(a < b);
        assert_eq!(MatchId::from("NA1_1").to_string(), "NA1_1");
        assert_eq!(a.as_str(), "a-puuid");
    }
}
