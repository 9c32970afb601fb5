//! Session timing.
//!
//! The clock never polls and never blocks; callers read `elapsed` on
//! whatever cadence their display needs. Time flows through the
//! [`TimeSource`] trait so tests drive it by hand.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Monotonic time readings.
///
/// `now` is the time elapsed since an arbitrary fixed origin; only
/// differences between readings are meaningful.
pub trait TimeSource {
    /// Current reading.
    fn now(&self) -> Duration;
}

/// Wall-clock time source backed by [`Instant`].
#[derive(Clone, Debug)]
pub struct MonotonicTime {
    origin: Instant,
}

impl MonotonicTime {
    /// Create a time source anchored at the current instant.
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicTime {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for MonotonicTime {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Hand-driven time source for deterministic tests.
///
/// Clones share the same underlying reading, so a test can keep one
/// handle while the session under test owns another.
#[derive(Clone, Debug, Default)]
pub struct ManualTime {
    now: Rc<Cell<Duration>>,
}

impl ManualTime {
    /// Create a manual time source starting at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the reading.
    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl TimeSource for ManualTime {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

/// Stopwatch for one play-through.
///
/// Started when the board is dealt, stopped on the 16th matched card.
/// A restart discards the clock and starts a fresh one.
#[derive(Clone, Copy, Debug)]
pub struct SessionClock {
    started_at: Duration,
    stopped: Option<Duration>,
}

impl SessionClock {
    /// Start the clock at the source's current reading.
    #[must_use]
    pub fn start(time: &impl TimeSource) -> Self {
        Self {
            started_at: time.now(),
            stopped: None,
        }
    }

    /// Elapsed time since start. Side-effect free.
    ///
    /// After [`SessionClock::stop`], returns the frozen final time.
    #[must_use]
    pub fn elapsed(&self, time: &impl TimeSource) -> Duration {
        match self.stopped {
            Some(total) => total,
            None => time.now().saturating_sub(self.started_at),
        }
    }

    /// Freeze the clock and return the final elapsed time.
    ///
    /// Idempotent: stopping an already-stopped clock returns the same
    /// frozen value.
    pub fn stop(&mut self, time: &impl TimeSource) -> Duration {
        let total = self.elapsed(time);
        self.stopped = Some(total);
        total
    }

    /// Has this clock been stopped?
    #[must_use]
    pub fn is_stopped(&self) -> bool {
        self.stopped.is_some()
    }
}
