//! Cycle-scoped cache of fetched match details.
//!
//! Built fresh for each cycle and dropped at its end, so two tracked
//! players who finished the same match cost one summary fetch and one
//! timeline fetch, whichever team each of them played on.

use std::collections::HashMap;

use crate::domain::game::MatchSummary;
use crate::domain::id::MatchId;
use crate::domain::timeline::MatchTimeline;
use crate::error::ApiError;

#[derive(Debug, Default)]
pub struct CycleCache {
    summaries: HashMap<MatchId, Result<MatchSummary, ApiError>>,
    /// `None` records a failed fetch so it is not repeated.
    timelines: HashMap<MatchId, Option<MatchTimeline>>,
}

impl CycleCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_summary(&mut self, match_id: MatchId, result: Result<MatchSummary, ApiError>) {
        self.summaries.insert(match_id, result);
    }

    /// Fetch outcome for a match, `None` if it was never requested.
    #[must_use]
    pub fn summary(&self, match_id: &MatchId) -> Option<&Result<MatchSummary, ApiError>> {
        self.summaries.get(match_id)
    }

    #[must_use]
    pub fn contains_summary(&self, match_id: &MatchId) -> bool {
        self.summaries.contains_key(match_id)
    }

    /// Cached timeline lookup: outer `None` if never fetched.
    #[must_use]
    pub fn timeline(&self, match_id: &MatchId) -> Option<Option<&MatchTimeline>> {
        self.timelines.get(match_id).map(Option::as_ref)
    }

    pub fn insert_timeline(&mut self, match_id: MatchId, timeline: Option<MatchTimeline>) {
        self.timelines.insert(match_id, timeline);
    }

    /// Number of distinct matches requested this cycle.
    #[must_use]
    pub fn summary_count(&self) -> usize {
        self.summaries.len()
    }
}
