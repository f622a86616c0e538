//! Append-only JSON Lines outbox.
//!
//! Each accepted event is written as one line and synced to disk before
//! `notify` returns. Consumers read the file and deduplicate on
//! `player_id` + `match_id`.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use tracing::debug;

use crate::error::{Error, Result};
use crate::port::outbound::notifier::{MatchNotification, Notifier};

/// Notifier appending events to a JSONL file.
pub struct OutboxNotifier {
    path: PathBuf,
    file: Mutex<File>,
}

impl OutboxNotifier {
    /// Open (or create) the outbox at `path`, creating parent directories.
    ///
    /// # Errors
    /// Returns an error if the directory or file cannot be created.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        Ok(Self {
            path,
            file: Mutex::new(file),
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Notifier for OutboxNotifier {
    fn notify(&self, event: &MatchNotification) -> Result<()> {
        let mut line = serde_json::to_vec(event)?;
        line.push(b'\n');

        let mut file = self.file.lock();
        file.write_all(&line)
            .and_then(|()| file.sync_data())
            .map_err(|e| Error::Notify(format!("outbox {}: {e}", self.path.display())))?;
        debug!(key = %event.dedup_key(), "Appended to outbox");
        Ok(())
    }
}
