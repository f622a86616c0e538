//! Match change detection.

pub mod cache;
pub mod cycle;
pub mod enrich;
pub mod pacer;
pub mod service;
