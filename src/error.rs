use std::time::Duration;

use thiserror::Error;

use crate::domain::error::DomainError;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Failures talking to the match-data API.
///
/// `RateLimited`, `TransientServer` and `Timeout` are retried inside the
/// client and only escape wrapped in `RetriesExhausted`. `Client` is never
/// retried.
/// `DataShape` means the payload did not match the expected structure.
#[derive(Error, Debug, Clone)]
pub enum ApiError {
    #[error("rate limited (retry after {retry_after:?})")]
    RateLimited { retry_after: Option<Duration> },

    #[error("server error: HTTP {status}")]
    TransientServer { status: u16 },

    #[error("request rejected: HTTP {status}: {body}")]
    Client { status: u16, body: String },

    #[error("gave up after {attempts} attempts: {last}")]
    RetriesExhausted { attempts: u32, last: String },

    #[error("unexpected payload: {0}")]
    DataShape(String),

    #[error("request timed out or could not connect: {0}")]
    Timeout(String),

    #[error("transport error: {0}")]
    Transport(String),
}

impl ApiError {
    /// Whether the client should try the request again.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::RateLimited { .. } | Self::TransientServer { .. } | Self::Timeout(_)
        )
    }

    /// HTTP status for errors that carry one.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::RateLimited { .. } => Some(429),
            Self::TransientServer { status } | Self::Client { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    #[error("connection error: {0}")]
    Connection(String),

    #[error("database error: {0}")]
    Database(String),

    #[error("notification not delivered: {0}")]
    Notify(String),

    #[error("player not tracked: {0}")]
    UnknownPlayer(String),

    #[error("background task failed: {0}")]
    Task(String),
}

pub type Result<T> = std::result::Result<T, Error>;
