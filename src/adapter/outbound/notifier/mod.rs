//! Notification adapters.
//!
//! Implements the `port::Notifier` trait for in-process and file-backed
//! sinks.

pub mod channel;
pub mod outbox;
