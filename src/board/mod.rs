//! The board: card identities, face state, and the two-card match rule.

pub mod card;
pub mod engine;

/// Cards per side of the square grid.
pub const GRID_SIZE: usize = 4;

/// Total cards on a board.
pub const CARD_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// Symbol pairs hidden on a board.
pub const PAIR_COUNT: usize = CARD_COUNT / 2;

pub use card::{Card, CardState, Position, Symbol};
pub use engine::{Board, BoardId, RevealOutcome};
