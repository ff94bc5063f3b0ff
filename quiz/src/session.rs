//! Session orchestration: the per-question race between the answer collector
//! and the session deadline.
//!
//! One sequential control flow runs the whole session. The only concurrent
//! activity is the deadline timer (plus the stdin reader thread backing the
//! collector); the only suspension point is the bounded wait inside each
//! collect. The expiry flag is the single piece of shared state, observed
//! with one consistent read per decision.

use std::time::Duration;

use anyhow::{Result, bail};
use tracing::{debug, info, instrument, warn};

use crate::collect::{AnswerSource, Collector, LineEvent};
use crate::core::ledger::{FinalReport, Ledger};
use crate::core::normalize::normalize;
use crate::core::types::{Outcome, Problem};
use crate::deadline::DeadlineHandle;

/// One quiz session over an ordered problem set.
///
/// Lifecycle is enforced by ownership rather than a state field: a
/// constructed `Session` has not started, [`Session::run`] consumes it while
/// running, and the returned [`FinalReport`] is the finished, terminal state.
#[derive(Debug)]
pub struct Session {
    problems: Vec<Problem>,
    budget: Duration,
}

impl Session {
    /// Prepare a session. Fails fast on an empty problem set or a zero
    /// budget: neither can produce a meaningful run, and no report is written
    /// for a session that never starts.
    pub fn new(problems: Vec<Problem>, budget: Duration) -> Result<Self> {
        if problems.is_empty() {
            bail!("problem set is empty");
        }
        if budget.is_zero() {
            bail!("session budget must be positive");
        }
        Ok(Self { problems, budget })
    }

    /// Run the session: ready gate, countdown start, per-question loop.
    ///
    /// The countdown starts only after the user acknowledges the ready
    /// prompt, so thinking about whether to start costs no budget.
    pub fn run<S: AnswerSource>(self, source: S) -> Result<FinalReport> {
        let budget = self.budget;
        self.run_with_deadline(source, move || DeadlineHandle::start(budget))
    }

    /// Same as [`Session::run`], but with a caller-supplied deadline factory.
    /// Tests inject [`DeadlineHandle::manual`] here to drive expiry without
    /// wall-clock sleeps.
    #[instrument(skip_all, fields(problems = self.problems.len(), budget_secs = self.budget.as_secs()))]
    pub fn run_with_deadline<S, F>(self, source: S, start_deadline: F) -> Result<FinalReport>
    where
        S: AnswerSource,
        F: FnOnce() -> DeadlineHandle,
    {
        let mut collector = Collector::new(source);

        println!(
            "You will have {} seconds to complete the quiz.",
            self.budget.as_secs()
        );
        println!("Hit enter when you're ready to start...");
        if collector.wait_for_ready() == LineEvent::Closed {
            bail!("input closed before the session started");
        }

        let deadline = start_deadline();
        info!("session started");
        Ok(run_problems(&self.problems, &deadline, &mut collector))
    }
}

/// The per-question loop. Infallible by design: every problem resolves to an
/// outcome, and outcomes are the only way the loop communicates trouble.
fn run_problems<S: AnswerSource>(
    problems: &[Problem],
    deadline: &DeadlineHandle,
    collector: &mut Collector<S>,
) -> FinalReport {
    let mut ledger = Ledger::new();
    let mut expired = false;

    for problem in problems {
        // Expiry may have fired between questions. Once observed, every
        // remaining problem resolves to TimedOut without being prompted.
        if !expired && deadline.expired() {
            expired = true;
            println!("Time's up!");
        }
        if expired {
            ledger.append(&problem.prompt, Outcome::TimedOut);
            continue;
        }

        let event = collector.collect(&problem.prompt, deadline.remaining());

        // The race is decided here: the expiry state is read before the
        // collector result is honored. A line that arrived in the same
        // instant the deadline fired is discarded, never recorded. NoInput
        // means the wait spanned the entire remaining budget, which is the
        // deadline winning outright.
        let outcome = if deadline.expired() || event == LineEvent::NoInput {
            expired = true;
            println!("Time's up!");
            Outcome::TimedOut
        } else if let LineEvent::Line(given) = event {
            let correct = given == normalize(&problem.expected);
            println!("...saved");
            debug!(correct, "answer recorded");
            Outcome::Answered { given, correct }
        } else {
            warn!("input stream closed mid-question");
            Outcome::Invalid
        };

        ledger.append(&problem.prompt, outcome);
    }

    info!(
        correct = ledger.correct(),
        resolved = ledger.resolved(),
        "session finished"
    );
    ledger.finalize()
}
