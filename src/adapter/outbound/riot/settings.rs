//! Riot API client configuration.

use serde::Deserialize;

/// Regional routing value for account and match endpoints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    #[default]
    Americas,
    Europe,
    Asia,
    Sea,
}

impl Region {
    #[must_use]
    pub const fn host_prefix(self) -> &'static str {
        match self {
            Self::Americas => "americas",
            Self::Europe => "europe",
            Self::Asia => "asia",
            Self::Sea => "sea",
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.host_prefix())
    }
}

/// Riot HTTP client configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct RiotHttpConfig {
    /// Request timeout in milliseconds.
    #[serde(default = "default_http_timeout_ms")]
    pub timeout_ms: u64,
    /// Connect timeout in milliseconds.
    #[serde(default = "default_http_connect_timeout_ms")]
    pub connect_timeout_ms: u64,
    /// Maximum attempts per request, including the first.
    #[serde(default = "default_http_retry_max_attempts")]
    pub retry_max_attempts: u32,
    /// First backoff for 429 and 5xx responses in milliseconds.
    #[serde(default = "default_http_retry_backoff_ms")]
    pub retry_backoff_ms: u64,
    /// Ceiling for the doubling backoff in milliseconds.
    #[serde(default = "default_http_retry_backoff_max_ms")]
    pub retry_backoff_max_ms: u64,
}

const fn default_http_timeout_ms() -> u64 {
    10_000
}

const fn default_http_connect_timeout_ms() -> u64 {
    3_000
}

const fn default_http_retry_max_attempts() -> u32 {
    5
}

const fn default_http_retry_backoff_ms() -> u64 {
    1_000
}

const fn default_http_retry_backoff_max_ms() -> u64 {
    60_000
}

impl Default for RiotHttpConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_http_timeout_ms(),
            connect_timeout_ms: default_http_connect_timeout_ms(),
            retry_max_attempts: default_http_retry_max_attempts(),
            retry_backoff_ms: default_http_retry_backoff_ms(),
            retry_backoff_max_ms: default_http_retry_backoff_max_ms(),
        }
    }
}

/// Riot API configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RiotConfig {
    /// Regional routing host.
    #[serde(default)]
    pub region: Region,
    /// Override for the API base URL (tests, proxies).
    #[serde(default)]
    pub base_url: Option<String>,
    /// HTTP behaviour.
    #[serde(default)]
    pub http: RiotHttpConfig,
    /// API key, loaded from `RIOT_API_KEY` at runtime (never from the file).
    #[serde(skip)]
    pub api_key: Option<String>,
}

impl RiotConfig {
    /// Base URL requests are built against.
    #[must_use]
    pub fn base_url(&self) -> String {
        self.base_url.clone().unwrap_or_else(|| {
            format!("https://{}.api.riotgames.com", self.region.host_prefix())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_defaults_to_regional_host() {
        let config = RiotConfig {
            region: Region::Europe,
            ..RiotConfig::default()
        };
        assert_eq!(config.base_url(), "https://europe.api.riotgames.com");
    }

    #[test]
    fn base_url_override_wins() {
        let config = RiotConfig {
            base_url: Some("http://127.0.0.1:8080".into()),
            ..RiotConfig::default()
        };
        assert_eq!(config.base_url(), "http://127.0.0.1:8080");
    }

    #[test]
    fn http_defaults_cap_backoff_at_a_minute() {
        let http = RiotHttpConfig::default();
        assert_eq!(http.retry_backoff_max_ms, 60_000);
        assert!(http.retry_max_attempts > 1);
    }
}
