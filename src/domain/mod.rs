//! Framework-free core types: identifiers, match summaries, timelines and
//! the side-strength analyzer.
//!
//! Nothing in this module performs I/O.

pub mod error;
pub mod game;
pub mod id;
pub mod player;
pub mod report;
pub mod side;
pub mod timeline;
