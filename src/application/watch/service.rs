//! Background watch loop.
//!
//! ```text
//! WatchService::start ──spawn──> loop {
//!                                  interval tick (missed ticks delayed)
//!                                  WatchCycle::run  ── runs to completion
//!                                  stop requested? ── checked between cycles
//!                                }
//! ```

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{error, info, warn};

use super::cycle::WatchCycle;
use crate::domain::report::CycleReport;
use crate::error::{Error, Result};
use crate::port::outbound::store::{MatchStateStore, RosterStore};

/// Shortest allowed pause between cycle starts.
pub const MIN_INTERVAL: Duration = Duration::from_secs(10);

/// Raise `requested` to [`MIN_INTERVAL`] if it is shorter.
#[must_use]
pub fn clamp_interval(requested: Duration) -> Duration {
    if requested < MIN_INTERVAL {
        warn!(
            requested_secs = requested.as_secs_f64(),
            min_secs = MIN_INTERVAL.as_secs(),
            "Watch interval below minimum, clamping"
        );
        MIN_INTERVAL
    } else {
        requested
    }
}

/// Handle for stopping and joining a running watch loop.
pub struct WatchHandle {
    stop_tx: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl WatchHandle {
    /// Ask the loop to stop after the current cycle.
    pub fn stop(&self) {
        let _ = self.stop_tx.send(true);
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Wait for the loop task to exit.
    ///
    /// # Errors
    /// Returns an error if the task panicked or was aborted.
    pub async fn join(self) -> Result<()> {
        self.task
            .await
            .map_err(|e| Error::Task(format!("watch loop: {e}")))
    }

    /// Stop and wait.
    ///
    /// # Errors
    /// Returns an error if the task panicked or was aborted.
    pub async fn shutdown(self) -> Result<()> {
        self.stop();
        self.join().await
    }
}

/// Runs [`WatchCycle`]s on a fixed interval.
pub struct WatchService<S> {
    cycle: Arc<WatchCycle<S>>,
    interval: Duration,
}

impl<S> WatchService<S>
where
    S: MatchStateStore + RosterStore + 'static,
{
    /// Create a service; `interval` is clamped to [`MIN_INTERVAL`].
    pub fn new(cycle: WatchCycle<S>, interval: Duration) -> Self {
        Self {
            cycle: Arc::new(cycle),
            interval: clamp_interval(interval),
        }
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Run a single cycle in the foreground.
    ///
    /// # Errors
    /// Returns an error if the roster cannot be read.
    pub async fn run_once(&self) -> Result<CycleReport> {
        self.cycle.run().await
    }

    /// Spawn the loop. The first cycle starts immediately.
    pub fn start(self) -> WatchHandle {
        let (stop_tx, mut stop_rx) = watch::channel(false);
        let cycle = self.cycle;
        let period = self.interval;

        let task = tokio::spawn(async move {
            let mut ticker = interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            info!(interval_secs = period.as_secs(), "Watch loop started");

            loop {
                tokio::select! {
                    biased;

                    _ = stop_rx.changed() => break,

                    _ = ticker.tick() => {
                        if let Err(err) = cycle.run().await {
                            error!(error = %err, "Watch cycle failed");
                        }
                        if *stop_rx.borrow() {
                            break;
                        }
                    }
                }
            }
            info!("Watch loop stopped");
        });

        WatchHandle { stop_tx, task }
    }
}
