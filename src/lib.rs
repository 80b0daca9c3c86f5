//! # number-baseball
//!
//! Game engine for number baseball, the digit-guessing game also known as
//! bulls and cows.
//!
//! The engine picks a secret code of distinct digits. The player submits
//! guesses and gets strike/ball feedback until they match the code exactly
//! or run out of attempts.
//!
//! - **Strike**: right digit, right position.
//! - **Ball**: right digit, wrong position.
//!
//! ## Design
//!
//! 1. **Logic only**: no I/O. A frontend renders `GuessOutcome` and
//!    `ValidationError` values however it likes.
//!
//! 2. **Owned state**: each `GameEngine` owns its session. Concurrent games
//!    use separate engines.
//!
//! 3. **Deterministic**: secrets come from a seeded ChaCha8 RNG, so a game
//!    can be replayed from its seed.
//!
//! ## Modules
//!
//! - `core`: digits, codes, configuration, RNG
//! - `rules`: secret generation, guess validation, scoring
//! - `session`: attempt history, state machine, engine
//! - `error`: validation, submission and configuration errors

pub mod core;
pub mod error;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{Digit, GameConfig, GameRng, GameRngState, SecretCode, SecretStrategy, ValidGuess};

pub use crate::error::{ConfigError, SubmitError, ValidationError, ValidationErrorKind};

pub use crate::rules::{GuessOutcome, ScoreResult};

pub use crate::session::{GameEngine, History, HistoryEntry, SessionState, SessionStatus};
