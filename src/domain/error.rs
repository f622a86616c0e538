//! Domain validation errors for core domain types.
//!
//! These errors are returned by `try_new` constructors and parsers when
//! a value cannot represent a valid domain object.
//!
//! # Examples
//!
//! ```
//! use riftwatch::domain::error::DomainError;
//! use riftwatch::domain::id::RiotId;
//!
//! let result: Result<RiotId, _> = "NoTagLine".parse();
//! assert!(matches!(result, Err(DomainError::InvalidRiotId { .. })));
//! ```

use thiserror::Error;

/// Errors that occur when domain invariants are violated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Riot IDs must look like `GameName#TagLine`.
    #[error("invalid Riot ID '{value}': expected GameName#TagLine")]
    InvalidRiotId {
        /// The rejected input.
        value: String,
    },

    /// Subscription contexts must be non-empty.
    #[error("context name cannot be empty")]
    EmptyContext,
}
