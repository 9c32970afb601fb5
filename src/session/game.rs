//! One play-through: board, clock, and score driven by UI intents.
//!
//! The session is the boundary the presentation layer talks to. Input
//! intents go in (`reveal`, `restart`, `run_hide`); [`SessionEvent`]s
//! come back out for the UI to animate. The session never sleeps or
//! schedules: a mismatch yields an explicit [`HideTask`] and the caller
//! owns the timer that eventually hands it back.

use std::time::Duration;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::board::{Board, BoardId, Position, RevealOutcome, Symbol};
use crate::core::config::{ConfigError, GameConfig};
use crate::core::rng::GameRng;

use super::clock::{MonotonicTime, SessionClock, TimeSource};
use super::score::ScoreTracker;

/// Identifier for an outstanding delayed-hide task.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HideTaskId(pub u64);

impl std::fmt::Display for HideTaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "HideTask({})", self.0)
    }
}

/// A scheduled request to flip a mismatched pair face-down.
///
/// The session issues one per mismatch; the caller waits `delay` and
/// then hands the id back to [`GameSession::run_hide`]. Tasks die with
/// the board they were issued against, so a task that outlives its
/// board (a restart raced the timer) is absorbed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HideTask {
    /// Identifier to pass back to [`GameSession::run_hide`].
    pub id: HideTaskId,

    /// The board generation this task was issued against.
    pub board: BoardId,

    /// First card of the mismatched pair.
    pub first: Position,

    /// Second card of the mismatched pair.
    pub second: Position,

    /// How long the pair should stay visible before the hide runs.
    pub delay: Duration,
}

/// Events the presentation layer reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    /// A first card was revealed and awaits its partner.
    FirstPick {
        position: Position,
        symbol: Symbol,
    },

    /// A pair was found; both cards are now permanently face-up.
    Match { first: Position, second: Position },

    /// Two different symbols were revealed. The carried [`HideTask`]
    /// should be run after its delay.
    Mismatch {
        first: Position,
        second: Position,
        hide: HideTask,
    },

    /// The 8th pair was found. Emitted exactly once per session.
    GameComplete {
        total: Duration,
        best: Duration,
        is_new_best: bool,
    },
}

/// Events produced by one reveal. At most two (a match that completes
/// the board), stack-allocated.
pub type SessionEvents = SmallVec<[SessionEvent; 2]>;

/// A running game session.
///
/// Owns the live board, the session clock, and the process-lifetime
/// score tracker. Restarting replaces the board and clock; the tracker
/// survives until the session is dropped.
pub struct GameSession<T: TimeSource = MonotonicTime> {
    config: GameConfig,
    rng: GameRng,
    board: Board,
    clock: SessionClock,
    tracker: ScoreTracker,
    time: T,
    pending_hides: FxHashMap<HideTaskId, HideTask>,
    next_task: u64,
}

impl GameSession<MonotonicTime> {
    /// Start a session on the wall clock.
    ///
    /// Validates the configuration before any game state is built.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        Self::with_time_source(config, MonotonicTime::new())
    }
}

impl<T: TimeSource> GameSession<T> {
    /// Start a session on an injected time source.
    pub fn with_time_source(config: GameConfig, time: T) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        let board = Board::deal(BoardId::new(0), &config.symbols, &mut rng)?;
        let clock = SessionClock::start(&time);

        Ok(Self {
            config,
            rng,
            board,
            clock,
            tracker: ScoreTracker::new(),
            time,
            pending_hides: FxHashMap::default(),
            next_task: 0,
        })
    }

    /// Reveal the card at `position` and report what happened.
    ///
    /// Ignored reveals produce no events. A match that completes the
    /// board additionally stops the clock, records the completion, and
    /// appends [`SessionEvent::GameComplete`].
    ///
    /// # Panics
    ///
    /// Panics if `position` is out of range.
    pub fn reveal(&mut self, position: Position) -> SessionEvents {
        let mut events = SessionEvents::new();

        match self.board.reveal(position) {
            RevealOutcome::Ignored => {}
            RevealOutcome::FirstPick { position, symbol } => {
                events.push(SessionEvent::FirstPick { position, symbol });
            }
            RevealOutcome::Match { first, second } => {
                events.push(SessionEvent::Match { first, second });
                if self.board.is_complete() {
                    let total = self.clock.stop(&self.time);
                    let completion = self.tracker.record_completion(total);
                    debug!(
                        board = %self.board.id(),
                        total_ms = total.as_millis() as u64,
                        is_new_best = completion.is_new_best,
                        "session complete"
                    );
                    events.push(SessionEvent::GameComplete {
                        total,
                        best: completion.best,
                        is_new_best: completion.is_new_best,
                    });
                }
            }
            RevealOutcome::Mismatch { first, second } => {
                let hide = self.schedule_hide(first, second);
                events.push(SessionEvent::Mismatch {
                    first,
                    second,
                    hide,
                });
            }
        }

        events
    }

    fn schedule_hide(&mut self, first: Position, second: Position) -> HideTask {
        let id = HideTaskId(self.next_task);
        self.next_task += 1;

        let task = HideTask {
            id,
            board: self.board.id(),
            first,
            second,
            delay: self.config.mismatch_delay,
        };
        self.pending_hides.insert(id, task);
        task
    }

    /// Run a previously issued hide task.
    ///
    /// Unknown, already-run, and stale tasks (issued against a board a
    /// restart has since replaced) are silently absorbed; so are cards
    /// that became matched while the task was waiting.
    pub fn run_hide(&mut self, id: HideTaskId) {
        let Some(task) = self.pending_hides.remove(&id) else {
            trace!(%id, "hide task unknown or stale");
            return;
        };
        // Restart drops outstanding tasks, so a registered task always
        // targets the live board.
        debug_assert_eq!(task.board, self.board.id());

        self.board.hide(task.first, task.second);
    }

    /// Replace the board and clock for a fresh play-through.
    ///
    /// Outstanding hide tasks are invalidated; the score tracker and
    /// its best time survive.
    pub fn restart(&mut self) {
        let next = self.board.id().next();
        self.board = Board::deal(next, &self.config.symbols, &mut self.rng)
            .expect("pool validated at construction");
        self.pending_hides.clear();
        self.clock = SessionClock::start(&self.time);
        debug!(board = %self.board.id(), "session restarted");
    }

    /// Elapsed time in the current play-through.
    ///
    /// Frozen at the final total once the board completes. Callers poll
    /// this for the timer display.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.clock.elapsed(&self.time)
    }

    /// Best completion time recorded so far, if any.
    #[must_use]
    pub fn best_time(&self) -> Option<Duration> {
        self.tracker.best()
    }

    /// Pairs found on the current board.
    #[must_use]
    pub fn pairs_found(&self) -> usize {
        self.board.matched_count() / 2
    }

    /// Has the current board been fully matched?
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.board.is_complete()
    }

    /// The live board, for rendering.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The configuration this session was started with.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Hide tasks issued but not yet run.
    pub fn pending_hides(&self) -> impl Iterator<Item = &HideTask> {
        self.pending_hides.values()
    }
}
