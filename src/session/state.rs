//! Per-session state and the win/loss state machine.
//!
//! ```text
//! InProgress --exact match--------------------> Won
//! InProgress --miss, attempts == max----------> Lost
//! InProgress --miss, attempts <  max----------> InProgress
//! ```
//!
//! Won and Lost are terminal. Only accepted guesses count as attempts.

use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use super::history::History;
use crate::core::SecretCode;
use crate::error::SubmitError;
use crate::rules::{evaluate, validate, GuessOutcome};

/// Where a session stands.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionStatus {
    /// Guesses are accepted.
    #[display("in progress")]
    InProgress,
    /// The secret was guessed.
    #[display("won")]
    Won,
    /// The attempt budget ran out.
    #[display("lost")]
    Lost,
}

impl SessionStatus {
    /// Won or Lost.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, SessionStatus::InProgress)
    }
}

/// One game: the secret, the accepted guesses, and the outcome so far.
///
/// Owned by a single engine. Callers that share an engine across threads
/// must serialize access themselves.
#[derive(Clone, Debug)]
pub struct SessionState {
    secret: SecretCode,
    history: History,
    max_attempts: usize,
    status: SessionStatus,
}

impl SessionState {
    /// Start a session with the given secret.
    ///
    /// Only `GameEngine` builds sessions, after `GameConfig::validate` has
    /// checked `max_attempts >= 1` and the secret against the config.
    #[must_use]
    pub(crate) fn new(secret: SecretCode, max_attempts: usize) -> Self {
        debug_assert!(max_attempts > 0, "session needs at least one attempt");
        Self {
            secret,
            history: History::new(),
            max_attempts,
            status: SessionStatus::InProgress,
        }
    }

    /// Current status.
    #[must_use]
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// Check if the session has ended.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Accepted guesses so far.
    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Attempt budget for this session.
    #[must_use]
    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Accepted guesses so far.
    #[must_use]
    pub fn attempts_used(&self) -> usize {
        self.history.len()
    }

    /// Accepted guesses still allowed.
    #[must_use]
    pub fn attempts_remaining(&self) -> usize {
        self.max_attempts.saturating_sub(self.history.len())
    }

    /// Digits per code.
    #[must_use]
    pub fn code_length(&self) -> usize {
        self.secret.len()
    }

    /// The secret, once the session is over.
    #[must_use]
    pub fn revealed_secret(&self) -> Option<&SecretCode> {
        self.is_terminal().then_some(&self.secret)
    }

    /// Validate, score and record one guess.
    ///
    /// Rejected guesses leave the session untouched.
    ///
    /// # Errors
    ///
    /// - `SubmitError::SessionOver` if the session is already Won or Lost.
    /// - `SubmitError::Invalid` if the guess fails validation.
    #[instrument(skip(self), fields(attempt = self.history.len() + 1))]
    pub fn submit_guess(&mut self, raw: &str) -> Result<GuessOutcome, SubmitError> {
        if self.status.is_terminal() {
            return Err(SubmitError::SessionOver { status: self.status });
        }

        let guess = validate(raw, self.code_length(), &self.history).inspect_err(|err| {
            debug!(%err, "guess rejected");
        })?;

        let outcome = evaluate(&self.secret, &guess);
        debug!(%outcome, "guess accepted");
        self.history.push(guess, outcome);

        if outcome.is_win() {
            self.status = SessionStatus::Won;
            info!(attempts = self.history.len(), "session won");
        } else if self.history.len() >= self.max_attempts {
            self.status = SessionStatus::Lost;
            info!(attempts = self.history.len(), "session lost");
        }

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameConfig;
    use crate::error::ValidationErrorKind;
    use crate::rules::ScoreResult;

    fn session(secret: &str, max_attempts: usize) -> SessionState {
        SessionState::new(SecretCode::parse(secret, &GameConfig::default()).unwrap(), max_attempts)
    }

    #[test]
    fn test_new_session() {
        let state = session("1234", 10);
        assert_eq!(state.status(), SessionStatus::InProgress);
        assert_eq!(state.attempts_used(), 0);
        assert_eq!(state.attempts_remaining(), 10);
        assert_eq!(state.code_length(), 4);
        assert!(state.revealed_secret().is_none());
    }

    #[test]
    fn test_win() {
        let mut state = session("1234", 10);
        assert_eq!(state.submit_guess("1234"), Ok(GuessOutcome::Win));
        assert_eq!(state.status(), SessionStatus::Won);
        assert_eq!(state.attempts_used(), 1);
        assert_eq!(state.history().last().map(|e| e.outcome), Some(GuessOutcome::Win));
        assert_eq!(state.revealed_secret().map(ToString::to_string), Some("1234".to_string()));
    }

    #[test]
    fn test_feedback_recorded() {
        let mut state = session("1234", 10);
        assert_eq!(
            state.submit_guess("1243"),
            Ok(GuessOutcome::Feedback(ScoreResult::new(2, 2)))
        );
        assert_eq!(state.status(), SessionStatus::InProgress);
        assert!(state.history().contains("1243"));
    }

    #[test]
    fn test_rejection_consumes_nothing() {
        let mut state = session("1234", 10);
        for raw in ["11 2", "11a2", "123", "1123"] {
            let err = state.submit_guess(raw).unwrap_err();
            assert!(err.as_validation().is_some(), "{raw:?} should be a validation error");
        }
        assert_eq!(state.attempts_used(), 0);
        assert_eq!(state.status(), SessionStatus::InProgress);
    }

    #[test]
    fn test_repeat_guess_rejected() {
        let mut state = session("1234", 10);
        state.submit_guess("5678").unwrap();
        let err = state.submit_guess("5678").unwrap_err();
        assert_eq!(
            err.as_validation().map(|e| e.kind()),
            Some(ValidationErrorKind::AlreadyTried)
        );
        assert_eq!(state.attempts_used(), 1);
    }

    #[test]
    fn test_lost_after_budget() {
        let mut state = session("1234", 3);
        state.submit_guess("5678").unwrap();
        state.submit_guess("5679").unwrap();
        assert_eq!(state.status(), SessionStatus::InProgress);
        assert!(state.revealed_secret().is_none());

        state.submit_guess("5689").unwrap();
        assert_eq!(state.status(), SessionStatus::Lost);
        assert_eq!(state.attempts_remaining(), 0);
        assert!(state.revealed_secret().is_some());
    }

    #[test]
    fn test_win_on_last_attempt_is_win() {
        let mut state = session("1234", 2);
        state.submit_guess("5678").unwrap();
        assert_eq!(state.submit_guess("1234"), Ok(GuessOutcome::Win));
        assert_eq!(state.status(), SessionStatus::Won);
    }

    #[test]
    fn test_terminal_rejects_as_misuse() {
        let mut state = session("1234", 1);
        state.submit_guess("5678").unwrap();
        assert_eq!(
            state.submit_guess("1234"),
            Err(SubmitError::SessionOver { status: SessionStatus::Lost })
        );
        // Even malformed input is misuse once the session is over.
        assert_eq!(
            state.submit_guess("abc"),
            Err(SubmitError::SessionOver { status: SessionStatus::Lost })
        );
        assert_eq!(state.attempts_used(), 1);
    }

    #[test]
    fn test_status_display() {
        assert_eq!(SessionStatus::InProgress.to_string(), "in progress");
        assert_eq!(SessionStatus::Lost.to_string(), "lost");
        assert!(!SessionStatus::InProgress.is_terminal());
        assert!(SessionStatus::Won.is_terminal());
    }
}
