//! Guess validation.
//!
//! Checks run in a fixed order and the first failure wins. Players see the
//! resulting message, so the order is part of the contract:
//!
//! 1. whitespace
//! 2. non-digit character
//! 3. length
//! 4. repeated digit
//! 5. already tried this session
//!
//! `0` is a legal guess digit even though the default secret alphabet
//! excludes it. Such a guess is well-formed; it just cannot score on that digit.
//!
//! The empty string contains no non-digit character, so it fails the length
//! check (`WrongLength`), not the digit check. A `^\d+$`-style matcher would
//! report it as non-digit instead.

use crate::core::{Digit, Digits, ValidGuess, DEFAULT_CODE_LENGTH};
use crate::error::ValidationError;
use crate::session::History;

/// Validate a raw guess against the code length and the session history.
///
/// Pure: nothing is recorded, whether the guess passes or not.
///
/// ```
/// use number_baseball::error::ValidationErrorKind;
/// use number_baseball::rules::validate;
/// use number_baseball::session::History;
///
/// let history = History::new();
/// assert!(validate("1234", 4, &history).is_ok());
/// assert_eq!(
///     validate("11 2", 4, &history).unwrap_err().kind(),
///     ValidationErrorKind::ContainsWhitespace,
/// );
/// ```
///
/// # Errors
///
/// Returns the first failed check, carrying `raw`.
pub fn validate(raw: &str, code_length: usize, history: &History) -> Result<ValidGuess, ValidationError> {
    if raw.chars().any(char::is_whitespace) {
        return Err(ValidationError::ContainsWhitespace { raw: raw.to_string() });
    }

    let Some(digits) = raw.chars().map(Digit::from_char).collect::<Option<Digits>>() else {
        return Err(ValidationError::NonDigitCharacter { raw: raw.to_string() });
    };

    if digits.len() != code_length {
        return Err(ValidationError::WrongLength {
            raw: raw.to_string(),
            expected: code_length,
        });
    }

    if has_repeat(&digits) {
        return Err(ValidationError::DuplicateDigitsInGuess { raw: raw.to_string() });
    }

    if history.contains(raw) {
        return Err(ValidationError::AlreadyTried { raw: raw.to_string() });
    }

    Ok(ValidGuess::new(raw.to_string(), digits))
}

impl TryFrom<String> for ValidGuess {
    type Error = ValidationError;

    /// Re-check a guess read back from its serialized text.
    ///
    /// The session's code length and history are unknown here, so only the
    /// format checks run and any non-zero length is accepted.
    fn try_from(raw: String) -> Result<Self, Self::Error> {
        let code_length = raw.chars().count();
        if code_length == 0 {
            return Err(ValidationError::WrongLength {
                raw,
                expected: DEFAULT_CODE_LENGTH,
            });
        }
        validate(&raw, code_length, &History::new())
    }
}

fn has_repeat(digits: &[Digit]) -> bool {
    let mut seen = [false; 10];
    digits.iter().any(|d| std::mem::replace(&mut seen[usize::from(d.value())], true))
}
