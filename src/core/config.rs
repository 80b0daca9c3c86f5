//! Game configuration.
//!
//! Callers configure the engine at construction by providing a `GameConfig`:
//! - `max_attempts`: accepted guesses allowed before the session is lost
//! - `code_length`: digits per code
//! - `digit_alphabet`: digits the secret may use
//! - `secret_strategy`: how the secret is drawn
//!
//! The defaults are the classic game: 10 attempts, 4 digits, alphabet 1-9.

use serde::{Deserialize, Serialize};

use super::digit::Digit;
use crate::error::ConfigError;

/// Default number of accepted guesses per session.
pub const DEFAULT_MAX_ATTEMPTS: usize = 10;

/// Default number of digits in a code.
pub const DEFAULT_CODE_LENGTH: usize = 4;

/// How the secret code is drawn from the alphabet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SecretStrategy {
    /// Draw uniformly, discard repeats, stop once enough distinct digits are held.
    #[default]
    RejectionSampling,
    /// Partial Fisher-Yates over the alphabet. Bounded number of draws.
    PartialShuffle,
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Accepted guesses allowed per session.
    pub max_attempts: usize,

    /// Digits per code.
    pub code_length: usize,

    /// Digits the secret may be drawn from. Guesses are not restricted to it.
    pub digit_alphabet: Vec<Digit>,

    /// Secret generation algorithm.
    pub secret_strategy: SecretStrategy,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            code_length: DEFAULT_CODE_LENGTH,
            digit_alphabet: (1..=9).filter_map(Digit::new).collect(),
            secret_strategy: SecretStrategy::default(),
        }
    }
}

impl GameConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the attempt limit.
    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Set the code length.
    #[must_use]
    pub fn with_code_length(mut self, code_length: usize) -> Self {
        self.code_length = code_length;
        self
    }

    /// Set the secret alphabet.
    #[must_use]
    pub fn with_digit_alphabet(mut self, alphabet: impl IntoIterator<Item = Digit>) -> Self {
        self.digit_alphabet = alphabet.into_iter().collect();
        self
    }

    /// Set the secret generation strategy.
    #[must_use]
    pub fn with_secret_strategy(mut self, strategy: SecretStrategy) -> Self {
        self.secret_strategy = strategy;
        self
    }

    /// Check that a secret can be generated and a session can make progress.
    ///
    /// # Errors
    ///
    /// Returns the first problem found, checked in field order.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_attempts == 0 {
            return Err(ConfigError::ZeroAttempts);
        }
        if self.code_length == 0 {
            return Err(ConfigError::ZeroCodeLength);
        }

        let mut seen = [false; 10];
        for digit in &self.digit_alphabet {
            let slot = &mut seen[usize::from(digit.value())];
            if *slot {
                return Err(ConfigError::DuplicateAlphabetDigit { digit: *digit });
            }
            *slot = true;
        }

        if self.digit_alphabet.len() < self.code_length {
            return Err(ConfigError::AlphabetTooSmall {
                alphabet: self.digit_alphabet.len(),
                code_length: self.code_length,
            });
        }

        Ok(())
    }
}
