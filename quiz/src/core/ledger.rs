//! Append-only result ledger and running score tally.

use crate::core::types::{Outcome, ResultRow};

/// Ordered, append-only record of per-problem outcomes.
///
/// Exactly one row is appended per resolved problem, in problem order. The
/// tally (resolved and correct counts) only ever grows. [`Ledger::finalize`]
/// consumes the ledger, so no row can be appended after the hand-off to the
/// report writer; a late-completing read has nothing left to write into.
#[derive(Debug, Default)]
pub struct Ledger {
    rows: Vec<ResultRow>,
    correct: usize,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome for the next resolved problem.
    pub fn append(&mut self, prompt: &str, outcome: Outcome) {
        if outcome.is_correct() {
            self.correct += 1;
        }
        self.rows.push(ResultRow {
            prompt: prompt.to_string(),
            outcome,
        });
    }

    /// Problems resolved so far (excludes the summary, which only exists in
    /// the written report).
    pub fn resolved(&self) -> usize {
        self.rows.len()
    }

    /// Correct answers so far. Never exceeds [`Ledger::resolved`].
    pub fn correct(&self) -> usize {
        self.correct
    }

    /// Freeze the ledger into the final, ordered hand-off for the report
    /// writer. Consumes the ledger: the session cannot write past this point.
    pub fn finalize(self) -> FinalReport {
        let correct = self.correct;
        let total = self.rows.len();
        FinalReport {
            rows: self.rows,
            correct,
            total,
        }
    }
}

/// Finalized, ordered results plus the final score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinalReport {
    pub rows: Vec<ResultRow>,
    pub correct: usize,
    pub total: usize,
}
