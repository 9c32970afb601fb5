//! Card identity: symbols, grid positions, per-card state.
//!
//! Each card walks a small state machine:
//!
//! ```text
//! Hidden -> Revealed -> Hidden   (mismatch, flipped back)
//!                    -> Matched  (terminal until the board is replaced)
//! ```

use serde::{Deserialize, Serialize};

use super::{CARD_COUNT, GRID_SIZE};

/// A card face symbol.
///
/// One scalar per face; see [`crate::core::DEFAULT_SYMBOLS`] for the
/// stock pool.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Symbol(pub char);

impl Symbol {
    /// Create a new symbol.
    #[must_use]
    pub const fn new(face: char) -> Self {
        Self(face)
    }

    /// Get the raw face character.
    #[must_use]
    pub const fn raw(self) -> char {
        self.0
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Grid position, row-major on the fixed square grid.
///
/// Valid positions are `0..CARD_COUNT`; operations that take a position
/// treat an out-of-range value as a contract violation and panic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position(pub u8);

impl Position {
    /// Create a position from a raw row-major index.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    /// Create a position from grid coordinates.
    #[must_use]
    pub const fn from_row_col(row: u8, col: u8) -> Self {
        Self(row * GRID_SIZE as u8 + col)
    }

    /// Row-major index, usable for slice indexing.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Grid row.
    #[must_use]
    pub const fn row(self) -> u8 {
        self.0 / GRID_SIZE as u8
    }

    /// Grid column.
    #[must_use]
    pub const fn col(self) -> u8 {
        self.0 % GRID_SIZE as u8
    }

    /// Whether this position names a card on the board.
    #[must_use]
    pub const fn in_bounds(self) -> bool {
        (self.0 as usize) < CARD_COUNT
    }

    /// Iterate over every position on the board, in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..CARD_COUNT as u8).map(Position)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Position({})", self.0)
    }
}

/// Face state of a single card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardState {
    /// Face-down.
    Hidden,
    /// Face-up, not yet part of a matched pair.
    Revealed,
    /// Face-up permanently; its pair has been found.
    Matched,
}

/// A card on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// The face this card shows when revealed.
    pub symbol: Symbol,

    /// Current face state.
    pub state: CardState,
}

impl Card {
    /// Create a face-down card.
    #[must_use]
    pub const fn hidden(symbol: Symbol) -> Self {
        Self {
            symbol,
            state: CardState::Hidden,
        }
    }

    /// Is this card face-down?
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.state == CardState::Hidden
    }

    /// Is this card face-up but unmatched?
    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.state == CardState::Revealed
    }

    /// Has this card's pair been found?
    #[must_use]
    pub fn is_matched(&self) -> bool {
        self.state == CardState::Matched
    }
}
