//! Shared deterministic types for quiz core logic.
//!
//! These types define stable contracts between core components. They should
//! not depend on external state or I/O and must remain deterministic across
//! runs.

/// One quiz problem: the prompt shown to the user and the expected answer.
///
/// Problem ordering is significant: load order defines presentation order and
/// report order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    pub prompt: String,
    pub expected: String,
}

impl Problem {
    pub fn new(prompt: impl Into<String>, expected: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            expected: expected.into(),
        }
    }
}

/// Resolved disposition of one problem.
///
/// Produced exactly once per problem by the race between the answer collector
/// and the session deadline, and consumed exactly once by the ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// An answer was submitted before the deadline. `given` is the normalized
    /// answer text.
    Answered { given: String, correct: bool },
    /// The session budget expired before an answer was submitted.
    TimedOut,
    /// The input stream closed or failed while waiting for an answer.
    Invalid,
}

impl Outcome {
    /// Whether this outcome counts toward the correct tally.
    pub fn is_correct(&self) -> bool {
        matches!(self, Outcome::Answered { correct: true, .. })
    }
}

/// One ordered row of the result ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRow {
    pub prompt: String,
    pub outcome: Outcome,
}
