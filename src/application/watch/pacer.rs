//! Politeness spacing between request starts.

use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::{sleep_until, Instant};

/// Hands out start slots at least `spacing` apart.
///
/// Shared by every request of a cycle. The lock only guards the slot
/// bookkeeping; callers sleep after releasing it.
#[derive(Debug)]
pub struct Pacer {
    spacing: Duration,
    next_slot: Mutex<Option<Instant>>,
}

impl Pacer {
    #[must_use]
    pub fn new(spacing: Duration) -> Self {
        Self {
            spacing,
            next_slot: Mutex::new(None),
        }
    }

    /// Wait for this caller's start slot.
    pub async fn wait(&self) {
        if self.spacing.is_zero() {
            return;
        }
        let slot = {
            let mut next = self.next_slot.lock().await;
            let now = Instant::now();
            let slot = next.map_or(now, |n| n.max(now));
            *next = Some(slot + self.spacing);
            slot
        };
        sleep_until(slot).await;
    }
}
