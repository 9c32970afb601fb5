//! # pairflip
//!
//! The logic core of a memory-matching ("concentration") game: a 4×4
//! grid of face-down cards hiding 8 symbol pairs, revealed two at a
//! time, with a session timer and a process-lifetime best score.
//!
//! ## Design Principles
//!
//! 1. **Presentation-Free**: No rendering, animation, or scheduling.
//!    The presentation layer sends intents in and reacts to events out.
//!
//! 2. **Deterministic**: Dealing goes through an injectable seeded RNG
//!    and timing through an injectable time source, so every behavior
//!    is reproducible in tests.
//!
//! 3. **Explicit Delayed Work**: The engine never sleeps. A mismatch
//!    yields a [`HideTask`] stamped with the board generation it
//!    belongs to; the caller owns the timer, and a task that outlives
//!    its board is absorbed rather than corrupting the next deal.
//!
//! ## Modules
//!
//! - `core`: Configuration and deterministic RNG
//! - `board`: Cards, grid positions, and the two-card match rule
//! - `session`: Clock, score tracking, and the intent/event boundary
//!
//! ## Example
//!
//! ```
//! use pairflip::{GameConfig, GameSession, Position, SessionEvent};
//!
//! let mut session = GameSession::new(GameConfig::default().with_seed(42))?;
//!
//! for event in session.reveal(Position::new(0)) {
//!     match event {
//!         SessionEvent::FirstPick { position, symbol } => {
//!             println!("{position} shows {symbol}");
//!         }
//!         _ => unreachable!("a first reveal is always a first pick"),
//!     }
//! }
//! # Ok::<(), pairflip::ConfigError>(())
//! ```

pub mod board;
pub mod core;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, GameConfig, GameRng, DEFAULT_MISMATCH_DELAY, DEFAULT_SYMBOLS,
};

pub use crate::board::{
    Board, BoardId, Card, CardState, Position, RevealOutcome, Symbol, CARD_COUNT, GRID_SIZE,
    PAIR_COUNT,
};

pub use crate::session::{
    Completion, GameSession, HideTask, HideTaskId, ManualTime, MonotonicTime, ScoreTracker,
    SessionClock, SessionEvent, SessionEvents, TimeSource,
};
