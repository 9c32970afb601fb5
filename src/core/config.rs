//! Game configuration.
//!
//! The presentation layer configures the core at startup by providing:
//! - the symbol pool a board draws its 8 pairs from
//! - the mismatch display delay stamped onto hide tasks
//! - an optional RNG seed for reproducible deals
//!
//! The grid shape itself is fixed (see [`crate::board::GRID_SIZE`]).

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::card::Symbol;
use crate::board::PAIR_COUNT;

/// How long a mismatched pair stays face-up before the caller is
/// expected to run the hide task.
pub const DEFAULT_MISMATCH_DELAY: Duration = Duration::from_millis(700);

/// The stock symbol pool: ten animal emoji.
pub const DEFAULT_SYMBOLS: [Symbol; 10] = [
    Symbol('🐶'),
    Symbol('🐱'),
    Symbol('🐼'),
    Symbol('🐵'),
    Symbol('🦊'),
    Symbol('🐸'),
    Symbol('🐯'),
    Symbol('🐷'),
    Symbol('🐙'),
    Symbol('🐰'),
];

/// Errors surfaced before any game state is built.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The symbol pool cannot populate a full board of distinct pairs.
    #[error("symbol pool holds {found} distinct symbols, a board needs {required}")]
    PoolTooSmall { required: usize, found: usize },

    /// A fixed layout whose symbols do not form exact pairs.
    #[error("symbol {0} does not appear exactly twice in the layout")]
    UnpairedSymbol(Symbol),
}

/// Complete game configuration.
///
/// The presentation layer provides this at startup. Defaults reproduce
/// the stock game: ten-emoji pool, 700 ms mismatch delay, entropy seed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Symbols a deal may draw from. Must hold at least 8 distinct values.
    pub symbols: Vec<Symbol>,

    /// Delay stamped onto hide tasks issued for mismatches.
    pub mismatch_delay: Duration,

    /// Fixed RNG seed. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SYMBOLS)
    }
}

impl GameConfig {
    /// Create a configuration with the given symbol pool.
    pub fn new(symbols: impl IntoIterator<Item = Symbol>) -> Self {
        Self {
            symbols: symbols.into_iter().collect(),
            mismatch_delay: DEFAULT_MISMATCH_DELAY,
            seed: None,
        }
    }

    /// Set the mismatch display delay.
    #[must_use]
    pub fn with_mismatch_delay(mut self, delay: Duration) -> Self {
        self.mismatch_delay = delay;
        self
    }

    /// Set a fixed RNG seed for reproducible deals.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// The pool with duplicates collapsed, original order preserved.
    #[must_use]
    pub fn distinct_symbols(&self) -> Vec<Symbol> {
        let mut distinct: Vec<Symbol> = Vec::with_capacity(self.symbols.len());
        for &symbol in &self.symbols {
            if !distinct.contains(&symbol) {
                distinct.push(symbol);
            }
        }
        distinct
    }

    /// Check that the pool can populate a full board.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let found = self.distinct_symbols().len();
        if found < PAIR_COUNT {
            return Err(ConfigError::PoolTooSmall {
                required: PAIR_COUNT,
                found,
            });
        }
        Ok(())
    }
}
