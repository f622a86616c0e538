//! Infrastructure configuration modules.

pub mod analysis;
pub mod logging;
pub mod notifications;
pub mod roster;
pub mod settings;
pub mod watch;
