//! Best completion time for the running process.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Result of recording a finished session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Completion {
    /// This session's completion time.
    pub total: Duration,

    /// The best completion time so far, including this one.
    pub best: Duration,

    /// Did this session set a new best?
    pub is_new_best: bool,
}

/// Tracks the fastest completion since the tracker was created.
///
/// Plain owned state with process lifetime: the session holds one
/// across restarts, and nothing is ever persisted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreTracker {
    best: Option<Duration>,
}

impl ScoreTracker {
    /// Create a tracker with no recorded completion.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The best completion time, if any session has finished.
    #[must_use]
    pub fn best(&self) -> Option<Duration> {
        self.best
    }

    /// Record a finished session.
    ///
    /// The first completion is always a new best; afterwards only a
    /// strictly smaller time updates the record.
    pub fn record_completion(&mut self, total: Duration) -> Completion {
        let is_new_best = self.best.map_or(true, |best| total < best);
        if is_new_best {
            self.best = Some(total);
        }
        Completion {
            total,
            best: self.best.unwrap_or(total),
            is_new_best,
        }
    }
}
