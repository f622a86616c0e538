//! Riftwatch - League of Legends match watcher.
//!
//! Tracks a roster of players, notices when any of them finishes a new
//! match, and hands a summary of that match (with a side-strength read for
//! top and bottom laners) to one or more notifiers.
//!
//! # Architecture
//!
//! The crate follows a hexagonal layout:
//!
//! - **`domain`** - Identifiers, match summaries, the side-strength analysis
//!   and cycle reports. No I/O.
//! - **`port`** - Traits at the seams: the match-data API, the stores, the
//!   notifier, and the operator surface the CLI drives.
//! - **`application`** - The watch cycle and loop, and roster use cases.
//! - **`adapter`** - Riot HTTP client, SQLite and in-memory stores,
//!   notifiers, and the CLI.
//! - **`infrastructure`** - Configuration, wiring and operator
//!   implementations.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use riftwatch::adapter::outbound::memory::store::MemoryStore;
//! use riftwatch::adapter::outbound::notifier::channel::ChannelNotifier;
//! use riftwatch::adapter::outbound::riot::client::RiotClient;
//! use riftwatch::adapter::outbound::riot::settings::RiotConfig;
//! use riftwatch::application::watch::cycle::{CycleConfig, WatchCycle};
//!
//! # async fn demo() -> riftwatch::error::Result<()> {
//! let riot = RiotConfig {
//!     api_key: Some("RGAPI-...".to_string()),
//!     ..RiotConfig::default()
//! };
//! let api = Arc::new(RiotClient::from_config(&riot)?);
//! let (notifier, mut events) = ChannelNotifier::new(64);
//! let cycle = WatchCycle::new(
//!     Arc::new(MemoryStore::new()),
//!     api,
//!     Arc::new(notifier),
//!     CycleConfig::default(),
//! );
//!
//! cycle.run().await?;
//! while let Ok(event) = events.try_recv() {
//!     println!("{} {}", event.player_label, event.outcome);
//! }
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;
