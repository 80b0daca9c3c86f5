//! Accepted guesses for the current session, in submission order.

use serde::Serialize;

use crate::core::ValidGuess;
use crate::rules::GuessOutcome;

/// One accepted guess and what it scored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    /// The guess as submitted.
    pub guess: ValidGuess,
    /// What the engine answered.
    pub outcome: GuessOutcome,
}

impl std::fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} : {}", self.guess, self.outcome)
    }
}

/// Ordered log of accepted guesses.
///
/// Rejected input never lands here, so `len()` is the number of attempts used.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    /// Create an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of accepted guesses.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no guess has been accepted yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check if `raw` exactly equals an accepted guess.
    #[must_use]
    pub fn contains(&self, raw: &str) -> bool {
        self.entries.iter().any(|e| e.guess.as_str() == raw)
    }

    /// Iterate in submission order.
    pub fn iter(&self) -> std::slice::Iter<'_, HistoryEntry> {
        self.entries.iter()
    }

    /// The most recent entry.
    #[must_use]
    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    pub(crate) fn push(&mut self, guess: ValidGuess, outcome: GuessOutcome) {
        self.entries.push(HistoryEntry { guess, outcome });
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a HistoryEntry;
    type IntoIter = std::slice::Iter<'a, HistoryEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
