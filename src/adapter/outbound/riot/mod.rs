//! Riot Games API adapter.
//!
//! Account lookup, match lists, match details and timelines over HTTPS,
//! with retry on rate limits and server errors.

pub mod client;
pub mod dto;
pub mod settings;
