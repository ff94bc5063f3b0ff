//! End-to-end session scenarios over scripted input.
//!
//! Each scenario drives a full session through the public library surface
//! with a scripted answer source. Deadline expiry is driven by a manual
//! trigger so no assertion depends on wall-clock sleeps; one test exercises
//! the real timer thread with a deliberately tiny budget.

use std::time::Duration;

use quiz::core::types::{Outcome, Problem};
use quiz::deadline::DeadlineHandle;
use quiz::session::Session;
use quiz::test_support::{ScriptedAnswers, ScriptedEvent, ack, line};

fn problems(pairs: &[(&str, &str)]) -> Vec<Problem> {
    pairs
        .iter()
        .map(|(prompt, expected)| Problem::new(*prompt, *expected))
        .collect()
}

fn answered(given: &str, correct: bool) -> Outcome {
    Outcome::Answered {
        given: given.to_string(),
        correct,
    }
}

#[test]
fn all_answers_within_budget_score_fully() {
    let session = Session::new(
        problems(&[("2+2", "4"), ("3+3", "6")]),
        Duration::from_secs(30),
    )
    .expect("session");
    let (deadline, _trigger) = DeadlineHandle::manual();
    let source = ScriptedAnswers::new(vec![ack(), line("4"), line("6")]);

    let report = session
        .run_with_deadline(source, move || deadline)
        .expect("run");

    assert_eq!(report.rows.len(), 2);
    assert_eq!(report.rows[0].outcome, answered("4", true));
    assert_eq!(report.rows[1].outcome, answered("6", true));
    assert_eq!((report.correct, report.total), (2, 2));
}

#[test]
fn single_unanswered_problem_times_out() {
    let session = Session::new(problems(&[("2+2", "4")]), Duration::from_secs(1)).expect("session");
    let (deadline, trigger) = DeadlineHandle::manual();
    let source = ScriptedAnswers::new(vec![ack(), ScriptedEvent::Expire]).with_expiry(trigger);

    let report = session
        .run_with_deadline(source, move || deadline)
        .expect("run");

    assert_eq!(report.rows.len(), 1);
    assert_eq!(report.rows[0].outcome, Outcome::TimedOut);
    assert_eq!((report.correct, report.total), (0, 1));
}

#[test]
fn expiry_after_first_answer_bulk_times_out_the_rest() {
    let session = Session::new(
        problems(&[("a", "x"), ("b", "y"), ("c", "z")]),
        Duration::from_secs(5),
    )
    .expect("session");
    let (deadline, trigger) = DeadlineHandle::manual();
    // Correct first answer, then the deadline fires mid-read on the second
    // question. The third question must never be prompted.
    let source =
        ScriptedAnswers::new(vec![ack(), line("x"), ScriptedEvent::Expire]).with_expiry(trigger);

    let report = session
        .run_with_deadline(source, move || deadline)
        .expect("run");

    assert_eq!(report.rows.len(), 3);
    assert_eq!(report.rows[0].outcome, answered("x", true));
    assert_eq!(report.rows[1].outcome, Outcome::TimedOut);
    assert_eq!(report.rows[2].outcome, Outcome::TimedOut);
    assert_eq!((report.correct, report.total), (1, 3));

    let late_answers = report.rows[1..]
        .iter()
        .filter(|row| matches!(row.outcome, Outcome::Answered { .. }))
        .count();
    assert_eq!(late_answers, 0);
}

#[test]
fn answers_are_compared_normalized() {
    let session = Session::new(problems(&[("smallest prime", "x")]), Duration::from_secs(30))
        .expect("session");
    let (deadline, _trigger) = DeadlineHandle::manual();
    let source = ScriptedAnswers::new(vec![ack(), line("  X \t")]);

    let report = session
        .run_with_deadline(source, move || deadline)
        .expect("run");

    assert_eq!(report.rows[0].outcome, answered("x", true));
    assert_eq!((report.correct, report.total), (1, 1));
}

#[test]
fn closed_stream_marks_the_row_invalid_and_continues() {
    let session = Session::new(
        problems(&[("a", "x"), ("b", "y")]),
        Duration::from_secs(30),
    )
    .expect("session");
    let (deadline, _trigger) = DeadlineHandle::manual();
    // The stream fails on the first question, then recovers for the second.
    let source = ScriptedAnswers::new(vec![ack(), ScriptedEvent::Close, line("y")]);

    let report = session
        .run_with_deadline(source, move || deadline)
        .expect("run");

    assert_eq!(report.rows[0].outcome, Outcome::Invalid);
    assert_eq!(report.rows[1].outcome, answered("y", true));
    assert_eq!((report.correct, report.total), (1, 2));
}

#[test]
fn real_timer_preempts_an_idle_user() {
    let session = Session::new(
        problems(&[("2+2", "4"), ("3+3", "6")]),
        Duration::from_millis(50),
    )
    .expect("session");
    // The user never types; the source sits idle well past the budget.
    let source = ScriptedAnswers::new(vec![ack(), ScriptedEvent::Sleep(Duration::from_millis(200))]);
    let budget = Duration::from_millis(50);

    let report = session
        .run_with_deadline(source, move || DeadlineHandle::start(budget))
        .expect("run");

    assert_eq!(report.rows.len(), 2);
    assert!(report.rows.iter().all(|row| row.outcome == Outcome::TimedOut));
    assert_eq!((report.correct, report.total), (0, 2));
}

#[test]
fn row_count_matches_problem_count_after_any_run() {
    for script in [
        vec![ack(), line("4"), line("6"), line("8")],
        vec![ack(), line("4"), ScriptedEvent::Close],
        vec![ack(), ScriptedEvent::Close],
    ] {
        let session = Session::new(
            problems(&[("2+2", "4"), ("3+3", "6"), ("4+4", "8")]),
            Duration::from_secs(30),
        )
        .expect("session");
        let (deadline, _trigger) = DeadlineHandle::manual();
        let report = session
            .run_with_deadline(ScriptedAnswers::new(script), move || deadline)
            .expect("run");
        assert_eq!(report.rows.len(), 3);
        assert!(report.correct <= report.total);
    }
}
