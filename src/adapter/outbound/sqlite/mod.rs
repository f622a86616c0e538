//! SQLite persistence adapters.
//!
//! Durable match state and roster storage using Diesel ORM.

pub mod database;
pub mod store;
