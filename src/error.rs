//! Error types.
//!
//! - `ValidationError`: the player typed something unacceptable. Nothing changes.
//! - `SubmitError`: what `submit_guess` can return, which adds caller misuse.
//! - `ConfigError`: the engine cannot be built from the given configuration.

use derive_more::{Display, Error, From};

use crate::core::Digit;
use crate::session::SessionStatus;

/// A rejected guess.
///
/// Every variant carries the raw input so a presentation layer can echo it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Display, Error)]
pub enum ValidationError {
    /// The input contains a whitespace character.
    #[display("{raw:?} contains whitespace")]
    ContainsWhitespace {
        /// The input as submitted.
        raw: String,
    },

    /// The input contains a character other than `0`-`9`.
    #[display("{raw:?} contains a character that is not a digit")]
    NonDigitCharacter {
        /// The input as submitted.
        raw: String,
    },

    /// The input has the wrong number of digits.
    #[display("{raw:?} must be exactly {expected} digits")]
    WrongLength {
        /// The input as submitted.
        raw: String,
        /// The configured code length.
        expected: usize,
    },

    /// The input repeats a digit.
    #[display("{raw:?} repeats a digit")]
    DuplicateDigitsInGuess {
        /// The input as submitted.
        raw: String,
    },

    /// The input was already accepted earlier in this session.
    #[display("{raw:?} was already tried")]
    AlreadyTried {
        /// The input as submitted.
        raw: String,
    },
}

/// Payload-free discriminant of [`ValidationError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValidationErrorKind {
    /// See [`ValidationError::ContainsWhitespace`].
    ContainsWhitespace,
    /// See [`ValidationError::NonDigitCharacter`].
    NonDigitCharacter,
    /// See [`ValidationError::WrongLength`].
    WrongLength,
    /// See [`ValidationError::DuplicateDigitsInGuess`].
    DuplicateDigitsInGuess,
    /// See [`ValidationError::AlreadyTried`].
    AlreadyTried,
}

impl ValidationError {
    /// The kind of failure, without the payload.
    #[must_use]
    pub fn kind(&self) -> ValidationErrorKind {
        match self {
            Self::ContainsWhitespace { .. } => ValidationErrorKind::ContainsWhitespace,
            Self::NonDigitCharacter { .. } => ValidationErrorKind::NonDigitCharacter,
            Self::WrongLength { .. } => ValidationErrorKind::WrongLength,
            Self::DuplicateDigitsInGuess { .. } => ValidationErrorKind::DuplicateDigitsInGuess,
            Self::AlreadyTried { .. } => ValidationErrorKind::AlreadyTried,
        }
    }

    /// The rejected input.
    #[must_use]
    pub fn raw(&self) -> &str {
        match self {
            Self::ContainsWhitespace { raw }
            | Self::NonDigitCharacter { raw }
            | Self::WrongLength { raw, .. }
            | Self::DuplicateDigitsInGuess { raw }
            | Self::AlreadyTried { raw } => raw,
        }
    }
}

/// Error returned by `submit_guess`.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error, From)]
pub enum SubmitError {
    /// The guess was rejected. No attempt was consumed.
    #[display("invalid guess: {_0}")]
    Invalid(ValidationError),

    /// The session already ended. Start a new one first.
    #[display("session is over ({status})")]
    #[from(skip)]
    SessionOver {
        /// The terminal status the session ended in.
        status: SessionStatus,
    },
}

impl SubmitError {
    /// The validation failure, if this is one.
    #[must_use]
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Invalid(err) => Some(err),
            Self::SessionOver { .. } => None,
        }
    }
}

/// Invalid engine configuration.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum ConfigError {
    /// `max_attempts` is zero.
    #[display("max_attempts must be at least 1")]
    ZeroAttempts,

    /// `code_length` is zero.
    #[display("code_length must be at least 1")]
    ZeroCodeLength,

    /// The alphabet lists a digit twice.
    #[display("digit {digit} appears twice in the alphabet")]
    DuplicateAlphabetDigit {
        /// The repeated digit.
        digit: Digit,
    },

    /// The alphabet cannot supply enough distinct digits.
    #[display("alphabet has {alphabet} digits but codes need {code_length}")]
    AlphabetTooSmall {
        /// Distinct digits available.
        alphabet: usize,
        /// Digits required per code.
        code_length: usize,
    },

    /// An explicit secret does not fit the configuration.
    #[display("{secret:?} is not a valid secret for this configuration")]
    InvalidSecret {
        /// The rejected secret text.
        secret: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_accessors() {
        let err = ValidationError::WrongLength {
            raw: "123".to_string(),
            expected: 4,
        };
        assert_eq!(err.kind(), ValidationErrorKind::WrongLength);
        assert_eq!(err.raw(), "123");
        assert_eq!(err.to_string(), "\"123\" must be exactly 4 digits");
    }

    #[test]
    fn test_submit_error_from_validation() {
        let err: SubmitError = ValidationError::AlreadyTried {
            raw: "1234".to_string(),
        }
        .into();

        assert_eq!(err.as_validation().map(ValidationError::kind), Some(ValidationErrorKind::AlreadyTried));
        assert_eq!(err.to_string(), "invalid guess: \"1234\" was already tried");
    }

    #[test]
    fn test_session_over_is_not_validation() {
        let err = SubmitError::SessionOver {
            status: SessionStatus::Won,
        };
        assert!(err.as_validation().is_none());
        assert_eq!(err.to_string(), "session is over (won)");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::AlphabetTooSmall {
            alphabet: 3,
            code_length: 4,
        };
        assert_eq!(err.to_string(), "alphabet has 3 digits but codes need 4");
    }
}
