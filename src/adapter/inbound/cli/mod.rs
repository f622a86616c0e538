//! CLI module graph.

pub mod command;
pub mod config;
pub mod diagnostic;
pub mod operator;
pub mod output;
pub mod paths;
pub mod players;
pub mod run;
