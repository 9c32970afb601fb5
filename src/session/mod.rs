//! Session layer: timing, scoring, and the intent/event boundary.

pub mod clock;
pub mod game;
pub mod score;

pub use clock::{ManualTime, MonotonicTime, SessionClock, TimeSource};
pub use game::{GameSession, HideTask, HideTaskId, SessionEvent, SessionEvents};
pub use score::{Completion, ScoreTracker};
