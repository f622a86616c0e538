//! Outbound ports (driven side): interfaces implemented by outbound adapters.
//!
//! These contracts describe infrastructure dependencies: the match-data
//! API, persistent state, and the notification sink.

pub mod match_api;
pub mod notifier;
pub mod store;
