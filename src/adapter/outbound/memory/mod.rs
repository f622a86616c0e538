//! In-memory adapters.

pub mod store;
