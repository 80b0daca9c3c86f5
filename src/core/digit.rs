//! Digits and the two code shapes built from them.
//!
//! ## SecretCode
//!
//! The hidden code for one session. Ordered (position defines strikes),
//! pairwise distinct, drawn from the configured alphabet.
//!
//! ## ValidGuess
//!
//! A raw guess that passed validation. Same ordering and uniqueness rules
//! as a secret, but any ASCII digit is accepted, including `0`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::config::GameConfig;
use crate::error::ConfigError;

/// Inline storage for the digits of a code.
///
/// Codes never exceed ten digits, so they never spill to the heap.
pub type Digits = SmallVec<[Digit; 10]>;

/// A single decimal digit (`0..=9`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Digit(u8);

impl Digit {
    /// Create a digit, or `None` if `value > 9`.
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value <= 9 {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Parse an ASCII digit character.
    ///
    /// ```
    /// use number_baseball::core::Digit;
    ///
    /// assert_eq!(Digit::from_char('7'), Digit::new(7));
    /// assert_eq!(Digit::from_char('x'), None);
    /// // Non-ASCII decimal digits are rejected.
    /// assert_eq!(Digit::from_char('٣'), None);
    /// ```
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        if c.is_ascii_digit() {
            Some(Self(c as u8 - b'0'))
        } else {
            None
        }
    }

    /// Get the numeric value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Render as an ASCII character.
    #[must_use]
    pub const fn to_char(self) -> char {
        (b'0' + self.0) as char
    }
}

impl TryFrom<u8> for Digit {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| format!("{value} is not a decimal digit"))
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> Self {
        digit.0
    }
}

impl std::fmt::Display for Digit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn write_digits(digits: &[Digit], f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    for digit in digits {
        write!(f, "{}", digit.to_char())?;
    }
    Ok(())
}

/// The secret code for a session.
///
/// Immutable once created. Only the generator and [`SecretCode::parse`]
/// construct one, so every instance satisfies the configured length and
/// alphabet with no repeated digit.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SecretCode {
    digits: Digits,
}

impl SecretCode {
    /// Wrap digits the generator has already checked.
    pub(crate) fn from_digits_unchecked(digits: Digits) -> Self {
        Self { digits }
    }

    /// Parse an explicit secret, checking it against `config`.
    ///
    /// ```
    /// use number_baseball::core::{GameConfig, SecretCode};
    ///
    /// let config = GameConfig::default();
    /// assert!(SecretCode::parse("1234", &config).is_ok());
    /// assert!(SecretCode::parse("1230", &config).is_err()); // 0 is outside the alphabet
    /// assert!(SecretCode::parse("1123", &config).is_err());
    /// ```
    pub fn parse(text: &str, config: &GameConfig) -> Result<Self, ConfigError> {
        let invalid = || ConfigError::InvalidSecret {
            secret: text.to_string(),
        };

        let mut digits = Digits::new();
        for c in text.chars() {
            let digit = Digit::from_char(c).ok_or_else(invalid)?;
            if !config.digit_alphabet.contains(&digit) || digits.contains(&digit) {
                return Err(invalid());
            }
            digits.push(digit);
        }

        if digits.len() != config.code_length {
            return Err(invalid());
        }

        Ok(Self { digits })
    }

    /// The digits in position order.
    #[must_use]
    pub fn digits(&self) -> &[Digit] {
        &self.digits
    }

    /// Number of positions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// Always false for a constructed secret; provided for API symmetry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Position of `digit` in the secret, if present.
    #[must_use]
    pub fn position_of(&self, digit: Digit) -> Option<usize> {
        self.digits.iter().position(|&d| d == digit)
    }

    /// Check whether a validated guess is an exact, ordered match.
    #[must_use]
    pub fn matches(&self, guess: &ValidGuess) -> bool {
        self.digits == guess.digits
    }
}

impl std::fmt::Display for SecretCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write_digits(&self.digits, f)
    }
}

/// A guess that passed validation.
///
/// Keeps the raw text alongside the parsed digits: duplicate-guess
/// detection compares raw strings exactly. Serializes as the raw text;
/// deserializing runs the validator's format checks again, so the digits
/// are always derived from the text.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ValidGuess {
    raw: String,
    digits: Digits,
}

impl ValidGuess {
    /// Only the validator calls this, after every check has passed.
    pub(crate) fn new(raw: String, digits: Digits) -> Self {
        Self { raw, digits }
    }

    /// The guess exactly as submitted.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The digits in position order.
    #[must_use]
    pub fn digits(&self) -> &[Digit] {
        &self.digits
    }

    /// Position of `digit` in the guess, if present.
    #[must_use]
    pub fn position_of(&self, digit: Digit) -> Option<usize> {
        self.digits.iter().position(|&d| d == digit)
    }
}

impl From<ValidGuess> for String {
    fn from(guess: ValidGuess) -> Self {
        guess.raw
    }
}

impl std::fmt::Display for ValidGuess {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_range() {
        assert_eq!(Digit::new(0).map(Digit::value), Some(0));
        assert_eq!(Digit::new(9).map(Digit::value), Some(9));
        assert!(Digit::new(10).is_none());
    }

    #[test]
    fn test_digit_char_conversion() {
        for c in '0'..='9' {
            let digit = Digit::from_char(c).unwrap();
            assert_eq!(digit.to_char(), c);
        }
        assert!(Digit::from_char(' ').is_none());
        assert!(Digit::from_char('a').is_none());
    }

    #[test]
    fn test_digit_serde_rejects_out_of_range() {
        let digit: Digit = serde_json::from_str("7").unwrap();
        assert_eq!(digit.value(), 7);
        assert!(serde_json::from_str::<Digit>("12").is_err());
    }

    #[test]
    fn test_secret_parse() {
        let config = GameConfig::default();
        let secret = SecretCode::parse("4721", &config).unwrap();

        assert_eq!(secret.len(), 4);
        assert_eq!(secret.to_string(), "4721");
        assert_eq!(secret.position_of(Digit::new(7).unwrap()), Some(1));
        assert_eq!(secret.position_of(Digit::new(9).unwrap()), None);
    }

    #[test]
    fn test_secret_parse_rejects() {
        let config = GameConfig::default();
        for bad in ["", "123", "12345", "1123", "12a4", "0123"] {
            assert_eq!(
                SecretCode::parse(bad, &config),
                Err(ConfigError::InvalidSecret { secret: bad.to_string() }),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_secret_matches_guess() {
        let config = GameConfig::default();
        let secret = SecretCode::parse("1234", &config).unwrap();
        let digits = |s: &str| s.chars().filter_map(Digit::from_char).collect::<Digits>();

        assert!(secret.matches(&ValidGuess::new("1234".into(), digits("1234"))));
        assert!(!secret.matches(&ValidGuess::new("4321".into(), digits("4321"))));
    }
}
