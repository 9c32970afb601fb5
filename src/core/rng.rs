//! Deterministic random number generation for dealing boards.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces the same deal
//! - **Injectable**: The dealer takes the RNG as an argument, so tests
//!   can pin exact layouts
//!
//! ```
//! use pairflip::core::GameRng;
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//!
//! let mut left = [1, 2, 3, 4, 5, 6, 7, 8];
//! let mut right = left;
//! a.shuffle(&mut left);
//! b.shuffle(&mut right);
//! assert_eq!(left, right);
//! ```

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG used to sample and shuffle card symbols.
///
/// Uses ChaCha8 for speed while maintaining high-quality randomness.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG from OS entropy, for sessions without a fixed seed.
    ///
    /// The drawn seed is retained so the deal stays reproducible.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random::<u64>())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }

    /// Sample `amount` distinct elements from a slice, in random order.
    ///
    /// # Panics
    ///
    /// Panics if `amount` exceeds `slice.len()`. Callers validate pool
    /// size before sampling.
    #[must_use]
    pub fn sample_distinct<T: Copy>(&mut self, slice: &[T], amount: usize) -> Vec<T> {
        use rand::seq::index;
        index::sample(&mut self.inner, slice.len(), amount)
            .iter()
            .map(|i| slice[i])
            .collect()
    }
}
