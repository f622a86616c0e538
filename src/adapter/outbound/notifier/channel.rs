//! In-process notifier backed by a tokio channel.
//!
//! A chat-bot or other consumer holds the receiving end and does the slow
//! delivery on its own task.

use tokio::sync::mpsc;

use crate::error::{Error, Result};
use crate::port::outbound::notifier::{MatchNotification, Notifier};

/// Hands events to an mpsc receiver.
pub struct ChannelNotifier {
    tx: mpsc::Sender<MatchNotification>,
}

impl ChannelNotifier {
    /// Create a notifier and the receiver consuming its events.
    #[must_use]
    pub fn new(capacity: usize) -> (Self, mpsc::Receiver<MatchNotification>) {
        let (tx, rx) = mpsc::channel(capacity.max(1));
        (Self { tx }, rx)
    }
}

impl Notifier for ChannelNotifier {
    /// Fails when the buffer is full or the receiver is gone, so the
    /// watcher retries the match on its next cycle.
    fn notify(&self, event: &MatchNotification) -> Result<()> {
        self.tx
            .try_send(event.clone())
            .map_err(|e| Error::Notify(format!("channel: {e}")))
    }
}
