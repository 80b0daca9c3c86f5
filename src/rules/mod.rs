//! Game rules: secret generation, guess validation, scoring.
//!
//! Everything here is a pure function of its inputs (plus the RNG for
//! secrets). Session bookkeeping lives in `session`.

pub mod scorer;
pub mod secret;
pub mod validator;

pub use scorer::{evaluate, score, GuessOutcome, ScoreResult};
pub use secret::generate_secret;
pub use validator::validate;
