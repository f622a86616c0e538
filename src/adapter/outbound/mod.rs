//! Outbound adapters (driven side).

pub mod memory;
pub mod notifier;
pub mod riot;
pub mod sqlite;
