//! Core building blocks: configuration and deterministic RNG.

pub mod config;
pub mod rng;

pub use config::{ConfigError, GameConfig, DEFAULT_MISMATCH_DELAY, DEFAULT_SYMBOLS};
pub use rng::GameRng;
