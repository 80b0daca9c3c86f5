//! Core engine types: digits, codes, configuration, RNG.
//!
//! These are the building blocks every other module works with.
//! Games are configured via `GameConfig` rather than hard-coded limits.

pub mod config;
pub mod digit;
pub mod rng;

pub use config::{GameConfig, SecretStrategy, DEFAULT_CODE_LENGTH, DEFAULT_MAX_ATTEMPTS};
pub use digit::{Digit, Digits, SecretCode, ValidGuess};
pub use rng::{GameRng, GameRngState};
