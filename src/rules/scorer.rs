//! Strike/ball scoring.
//!
//! For each secret position, find that digit in the guess:
//! - same position: strike
//! - other position: ball
//! - absent: nothing
//!
//! Both codes have distinct digits, so every secret digit counts at most
//! once and `strikes + balls <= code_length`.

use serde::{Deserialize, Serialize};

use crate::core::{SecretCode, ValidGuess};

/// Strike and ball counts for one guess.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Right digit, right position.
    pub strikes: u8,
    /// Right digit, wrong position.
    pub balls: u8,
}

impl ScoreResult {
    /// Create a score.
    #[must_use]
    pub const fn new(strikes: u8, balls: u8) -> Self {
        Self { strikes, balls }
    }

    /// No digit in common with the secret.
    #[must_use]
    pub const fn is_out(self) -> bool {
        self.strikes == 0 && self.balls == 0
    }

    /// Every position is a strike.
    #[must_use]
    pub fn is_home_run(self, code_length: usize) -> bool {
        usize::from(self.strikes) == code_length
    }

    /// Digits shared with the secret, regardless of position.
    #[must_use]
    pub const fn common_digits(self) -> u8 {
        self.strikes + self.balls
    }
}

impl std::fmt::Display for ScoreResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_out() {
            return write!(f, "out");
        }
        let plural = |n: u8| if n == 1 { "" } else { "s" };
        write!(
            f,
            "{} strike{}, {} ball{}",
            self.strikes,
            plural(self.strikes),
            self.balls,
            plural(self.balls)
        )
    }
}

/// Result of an accepted guess.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GuessOutcome {
    /// The guess is the secret.
    Win,
    /// The guess is not the secret.
    Feedback(ScoreResult),
}

impl GuessOutcome {
    /// Check if this outcome ends the session with a win.
    #[must_use]
    pub fn is_win(self) -> bool {
        matches!(self, GuessOutcome::Win)
    }

    /// The score, if this is feedback.
    #[must_use]
    pub fn score(self) -> Option<ScoreResult> {
        match self {
            GuessOutcome::Win => None,
            GuessOutcome::Feedback(score) => Some(score),
        }
    }
}

impl std::fmt::Display for GuessOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GuessOutcome::Win => write!(f, "home run"),
            GuessOutcome::Feedback(score) => write!(f, "{score}"),
        }
    }
}

/// Count strikes and balls.
///
/// O(n²) over the code length, which is at most 10.
#[must_use]
pub fn score(secret: &SecretCode, guess: &ValidGuess) -> ScoreResult {
    let mut result = ScoreResult::default();

    for (i, &digit) in secret.digits().iter().enumerate() {
        match guess.position_of(digit) {
            Some(j) if j == i => result.strikes += 1,
            Some(_) => result.balls += 1,
            None => {}
        }
    }

    result
}

/// Score a guess, short-circuiting on an exact match.
#[must_use]
pub fn evaluate(secret: &SecretCode, guess: &ValidGuess) -> GuessOutcome {
    if secret.matches(guess) {
        GuessOutcome::Win
    } else {
        GuessOutcome::Feedback(score(secret, guess))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameConfig;
    use crate::rules::validate;
    use crate::session::History;

    fn secret(text: &str) -> SecretCode {
        SecretCode::parse(text, &GameConfig::default()).unwrap()
    }

    fn guess(text: &str) -> ValidGuess {
        validate(text, 4, &History::new()).unwrap()
    }

    #[test]
    fn test_score_examples() {
        let s = secret("1234");
        assert_eq!(score(&s, &guess("1234")), ScoreResult::new(4, 0));
        assert_eq!(score(&s, &guess("1243")), ScoreResult::new(2, 2));
        assert_eq!(score(&s, &guess("5678")), ScoreResult::new(0, 0));
        assert_eq!(score(&s, &guess("4321")), ScoreResult::new(0, 4));
        assert_eq!(score(&s, &guess("1567")), ScoreResult::new(1, 0));
        assert_eq!(score(&s, &guess("5162")), ScoreResult::new(0, 2));
    }

    #[test]
    fn test_zero_never_scores() {
        let s = secret("1234");
        assert_eq!(score(&s, &guess("0123")), ScoreResult::new(0, 3));
        assert_eq!(score(&s, &guess("1230")), ScoreResult::new(3, 0));
    }

    #[test]
    fn test_evaluate_short_circuits() {
        let s = secret("9876");
        assert_eq!(evaluate(&s, &guess("9876")), GuessOutcome::Win);
        assert_eq!(
            evaluate(&s, &guess("9867")),
            GuessOutcome::Feedback(ScoreResult::new(2, 2))
        );
    }

    #[test]
    fn test_score_helpers() {
        assert!(ScoreResult::new(0, 0).is_out());
        assert!(!ScoreResult::new(0, 1).is_out());
        assert!(ScoreResult::new(4, 0).is_home_run(4));
        assert!(!ScoreResult::new(3, 1).is_home_run(4));
        assert_eq!(ScoreResult::new(1, 2).common_digits(), 3);
    }

    #[test]
    fn test_display() {
        assert_eq!(ScoreResult::new(0, 0).to_string(), "out");
        assert_eq!(ScoreResult::new(1, 1).to_string(), "1 strike, 1 ball");
        assert_eq!(ScoreResult::new(2, 0).to_string(), "2 strikes, 0 balls");
        assert_eq!(GuessOutcome::Win.to_string(), "home run");
    }

    #[test]
    fn test_outcome_accessors() {
        assert!(GuessOutcome::Win.is_win());
        assert_eq!(GuessOutcome::Win.score(), None);

        let feedback = GuessOutcome::Feedback(ScoreResult::new(1, 3));
        assert!(!feedback.is_win());
        assert_eq!(feedback.score(), Some(ScoreResult::new(1, 3)));
    }
}
