//! Notification sink configuration.

use std::path::PathBuf;

use serde::Deserialize;

/// `[notifications]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct NotificationsConfig {
    /// Log every match at info level.
    #[serde(default = "default_log")]
    pub log: bool,
    /// Append every match to this JSON Lines file.
    #[serde(default)]
    pub outbox_path: Option<PathBuf>,
}

const fn default_log() -> bool {
    true
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            log: default_log(),
            outbox_path: None,
        }
    }
}
