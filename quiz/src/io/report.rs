//! Final report persistence.
//!
//! Serializes the finalized ledger to `<dir>/<YYYY-MM-DD>-report.csv`, named
//! after the session's start date: a header row, one row per problem in
//! session order, and a trailing summary row with the final score. A failed
//! write is terminal for the run; there is no retry.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use tracing::debug;

use crate::core::ledger::FinalReport;
use crate::core::types::Outcome;

/// Sentinel recorded as the given answer when the budget expired first.
const TIMED_OUT_ANSWER: &str = "time limit reached";
/// Sentinel recorded in the correctness column for a timed-out row.
const TIMED_OUT_VERDICT: &str = "--";
/// Sentinel recorded when the answer could not be read.
const INVALID_ANSWER: &str = "invalid";

/// Write the report file and return its path.
pub fn write_report(dir: &Path, started_at: DateTime<Utc>, report: &FinalReport) -> Result<PathBuf> {
    let date = started_at.format("%Y-%m-%d").to_string();
    let path = dir.join(format!("{date}-report.csv"));

    let mut out = String::new();
    push_record(&mut out, &["Results:", &date]);
    for row in &report.rows {
        let (given, verdict) = match &row.outcome {
            Outcome::Answered { given, correct } => (given.clone(), correct.to_string()),
            Outcome::TimedOut => (TIMED_OUT_ANSWER.to_string(), TIMED_OUT_VERDICT.to_string()),
            Outcome::Invalid => (INVALID_ANSWER.to_string(), "false".to_string()),
        };
        push_record(&mut out, &[&row.prompt, &given, &verdict]);
    }
    let score = format!("{}/{}", report.correct, report.total);
    push_record(&mut out, &["", "", "Final Score", &score]);

    fs::create_dir_all(dir).with_context(|| format!("create report dir {}", dir.display()))?;
    fs::write(&path, out).with_context(|| format!("write report {}", path.display()))?;
    debug!(path = %path.display(), rows = report.rows.len(), "report written");
    Ok(path)
}

fn push_record(out: &mut String, fields: &[&str]) {
    for (index, field) in fields.iter().enumerate() {
        if index > 0 {
            out.push(',');
        }
        out.push_str(&escape(field));
    }
    out.push('\n');
}

/// Quote a field when it contains a comma, quote, or newline; double any
/// embedded quotes.
fn escape(field: &str) -> String {
    if field.contains([',', '"', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
