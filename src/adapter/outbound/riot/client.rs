//! Riot REST API client.
//!
//! Every request carries the `X-Riot-Token` header and goes through
//! [`RiotClient::fetch`], which owns retry handling:
//!
//! - **429** waits for `Retry-After` (or the current rate-limit backoff),
//!   doubling that backoff on each further 429 up to the ceiling
//! - **5xx**, timeouts and connect failures wait on a separate doubling
//!   backoff
//! - any other **4xx** fails immediately
//!
//! Backoff sleeps only suspend the request that is being retried.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, RETRY_AFTER};
use reqwest::{Client as HttpClient, StatusCode};
use tokio::time::sleep;
use tracing::{debug, warn};
use url::Url;

use super::dto::response::{decode, AccountDto, MatchDto, TimelineDto};
use super::settings::{RiotConfig, RiotHttpConfig};
use crate::domain::game::MatchSummary;
use crate::domain::id::{MatchId, PlayerId, RiotId};
use crate::domain::timeline::MatchTimeline;
use crate::error::{ApiError, ConfigError, Result};
use crate::port::outbound::match_api::MatchApi;

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "X-Riot-Token";

/// Longest error body kept in [`ApiError::Client`].
const MAX_ERROR_BODY_CHARS: usize = 200;

/// Retry limits for one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Attempts including the first one.
    pub max_attempts: u32,
    pub initial_backoff: Duration,
    pub max_backoff: Duration,
}

impl RetryPolicy {
    /// Backoff to use after `current`, doubled and capped.
    #[must_use]
    pub fn next_backoff(&self, current: Duration) -> Duration {
        current.saturating_mul(2).min(self.max_backoff)
    }
}

impl From<&RiotHttpConfig> for RetryPolicy {
    fn from(config: &RiotHttpConfig) -> Self {
        Self {
            max_attempts: config.retry_max_attempts.max(1),
            initial_backoff: Duration::from_millis(config.retry_backoff_ms),
            max_backoff: Duration::from_millis(config.retry_backoff_max_ms),
        }
    }
}

/// HTTP client for the Riot account and match APIs.
pub struct RiotClient {
    http: HttpClient,
    base_url: Url,
    api_key: String,
    retry: RetryPolicy,
}

impl RiotClient {
    /// Create a client against `base_url`.
    ///
    /// # Errors
    /// Returns an error if `base_url` is not a valid URL or the HTTP client
    /// cannot be built.
    pub fn new(base_url: &str, api_key: impl Into<String>, http: &RiotHttpConfig) -> Result<Self> {
        let client = HttpClient::builder()
            .timeout(Duration::from_millis(http.timeout_ms))
            .connect_timeout(Duration::from_millis(http.connect_timeout_ms))
            .build()
            .map_err(|err| ApiError::Transport(format!("failed to build HTTP client: {err}")))?;

        Ok(Self {
            http: client,
            base_url: Url::parse(base_url)?,
            api_key: api_key.into(),
            retry: RetryPolicy::from(http),
        })
    }

    /// Create a client from configuration.
    ///
    /// # Errors
    /// Returns an error if the API key is missing or the base URL is invalid.
    pub fn from_config(config: &RiotConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .filter(|key| !key.is_empty())
            .ok_or(ConfigError::MissingField {
                field: "RIOT_API_KEY",
            })?;
        Self::new(&config.base_url(), api_key, &config.http)
    }

    #[must_use]
    pub fn retry_policy(&self) -> RetryPolicy {
        self.retry
    }

    /// Build the URL for `segments` below the base URL.
    ///
    /// Segments are percent-encoded, so Riot IDs with spaces are safe.
    fn url_for(&self, segments: &[&str], params: &[(&str, String)]) -> std::result::Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                ApiError::Transport(format!("base URL cannot be a base: {}", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments);
        if !params.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(params.iter().map(|(k, v)| (*k, v.as_str())));
        }
        Ok(url)
    }

    /// GET a JSON payload, retrying rate limits and transient failures.
    ///
    /// # Errors
    /// - [`ApiError::Client`] for non-429 4xx responses
    /// - [`ApiError::RetriesExhausted`] once `max_attempts` retryable
    ///   failures happened
    /// - [`ApiError::DataShape`] if the body is not JSON
    pub async fn fetch(
        &self,
        segments: &[&str],
        params: &[(&str, String)],
    ) -> std::result::Result<serde_json::Value, ApiError> {
        let url = self.url_for(segments, params)?;
        let mut attempt = 0;
        let mut rate_limit_backoff = self.retry.initial_backoff;
        let mut server_backoff = self.retry.initial_backoff;

        loop {
            attempt += 1;
            let err = match self.send_once(&url).await {
                Ok(value) => return Ok(value),
                Err(err) if err.is_retryable() => err,
                Err(err) => return Err(err),
            };

            if attempt >= self.retry.max_attempts {
                warn!(url = %url.path(), attempt, error = %err, "Giving up on request");
                return Err(ApiError::RetriesExhausted {
                    attempts: attempt,
                    last: err.to_string(),
                });
            }

            let delay = match &err {
                ApiError::RateLimited { retry_after } => {
                    let delay = retry_after.unwrap_or(rate_limit_backoff);
                    rate_limit_backoff = self.retry.next_backoff(rate_limit_backoff);
                    delay
                }
                _ => {
                    let delay = server_backoff;
                    server_backoff = self.retry.next_backoff(server_backoff);
                    delay
                }
            };

            warn!(
                url = %url.path(),
                attempt,
                max_attempts = self.retry.max_attempts,
                delay_ms = delay.as_millis() as u64,
                error = %err,
                "Request failed, retrying"
            );
            sleep(delay).await;
        }
    }

    async fn send_once(&self, url: &Url) -> std::result::Result<serde_json::Value, ApiError> {
        let response = self
            .http
            .get(url.clone())
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await
            .map_err(classify_transport)?;

        let status = response.status();
        if status.is_success() {
            let body = response.bytes().await.map_err(classify_transport)?;
            return serde_json::from_slice(&body).map_err(|e| ApiError::DataShape(e.to_string()));
        }

        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(ApiError::RateLimited {
                retry_after: retry_after(response.headers()),
            });
        }

        if status.is_server_error() {
            return Err(ApiError::TransientServer {
                status: status.as_u16(),
            });
        }

        let body = response.text().await.unwrap_or_default();
        Err(ApiError::Client {
            status: status.as_u16(),
            body: truncate(&body, MAX_ERROR_BODY_CHARS),
        })
    }
}

fn classify_transport(err: reqwest::Error) -> ApiError {
    if err.is_timeout() || err.is_connect() {
        ApiError::Timeout(err.to_string())
    } else {
        ApiError::Transport(err.to_string())
    }
}

/// Parse a `Retry-After` header given in whole seconds.
fn retry_after(headers: &HeaderMap) -> Option<Duration> {
    headers
        .get(RETRY_AFTER)?
        .to_str()
        .ok()?
        .trim()
        .parse::<u64>()
        .ok()
        .map(Duration::from_secs)
}

fn truncate(body: &str, max_chars: usize) -> String {
    body.chars().take(max_chars).collect()
}

#[async_trait]
impl MatchApi for RiotClient {
    async fn resolve_player(&self, riot_id: &RiotId) -> std::result::Result<PlayerId, ApiError> {
        let payload = self
            .fetch(
                &[
                    "riot",
                    "account",
                    "v1",
                    "accounts",
                    "by-riot-id",
                    riot_id.game_name(),
                    riot_id.tag_line(),
                ],
                &[],
            )
            .await?;
        let account: AccountDto = decode(payload)?;
        debug!(riot_id = %riot_id, puuid = %account.puuid, "Resolved account");
        Ok(PlayerId::new(account.puuid))
    }

    async fn latest_match_id(
        &self,
        player_id: &PlayerId,
    ) -> std::result::Result<Option<MatchId>, ApiError> {
        let payload = self
            .fetch(
                &["lol", "match", "v5", "matches", "by-puuid", player_id.as_str(), "ids"],
                &[("start", "0".to_string()), ("count", "1".to_string())],
            )
            .await?;
        let ids: Vec<String> = decode(payload)?;
        Ok(ids.into_iter().next().map(MatchId::new))
    }

    async fn match_summary(&self, match_id: &MatchId) -> std::result::Result<MatchSummary, ApiError> {
        let payload = self
            .fetch(&["lol", "match", "v5", "matches", match_id.as_str()], &[])
            .await?;
        let dto: MatchDto = decode(payload)?;
        MatchSummary::try_from(dto)
    }

    async fn match_timeline(
        &self,
        match_id: &MatchId,
        frames: usize,
    ) -> std::result::Result<MatchTimeline, ApiError> {
        let payload = self
            .fetch(
                &["lol", "match", "v5", "matches", match_id.as_str(), "timeline"],
                &[],
            )
            .await?;
        let dto: TimelineDto = decode(payload)?;
        dto.into_timeline(frames)
    }

    fn api_name(&self) -> &'static str {
        "Riot"
    }
}
