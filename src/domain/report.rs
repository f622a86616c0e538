//! Watch cycle outcome.

use std::time::Duration;

use serde::Serialize;

/// Counters for one finished cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CycleReport {
    /// Players on the roster when the cycle started.
    pub checked: usize,
    /// Players seen for the first time and stored without a notification.
    pub seeded: usize,
    pub unchanged: usize,
    /// Players whose latest id could not be fetched or stored.
    pub skipped: usize,
    pub notified: usize,
    /// Notifications the notifier rejected.
    pub undelivered: usize,
    /// Distinct match summaries requested.
    pub detail_fetches: usize,
    /// Flagged players whose match detail could not be fetched.
    pub failed_details: usize,
    #[serde(rename = "duration_ms", serialize_with = "as_millis")]
    pub duration: Duration,
}

impl CycleReport {
    /// Players the cycle will look at again next time without progress.
    #[must_use]
    pub fn retried(&self) -> usize {
        self.skipped + self.undelivered + self.failed_details
    }
}

fn as_millis<S: serde::Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_u64(u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
}
