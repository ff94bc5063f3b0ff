//! Problem source loading.
//!
//! Problems come from a CSV-shaped file of `prompt,expected_answer` rows.
//! Field quoting follows the usual CSV rules for embedded commas and doubled
//! quotes; multi-line fields are not supported. Row order is preserved: it
//! defines both presentation order and report order.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::debug;

use crate::core::types::Problem;

/// Load the ordered problem set from `path`.
///
/// A missing or unreadable file, a row without both fields, or an empty set
/// are all startup-fatal: a session must not begin without problems to ask.
pub fn load_problems(path: &Path) -> Result<Vec<Problem>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("read problem set {}", path.display()))?;

    let mut problems = Vec::new();
    for (index, record) in contents.lines().enumerate() {
        if record.trim().is_empty() {
            continue;
        }
        let fields = split_record(record);
        if fields.len() < 2 {
            bail!(
                "problem set {}: row {} has {} field(s), expected prompt,answer",
                path.display(),
                index + 1,
                fields.len()
            );
        }
        problems.push(Problem::new(fields[0].clone(), fields[1].clone()));
    }

    if problems.is_empty() {
        bail!("problem set {} contains no problems", path.display());
    }
    debug!(problems = problems.len(), path = %path.display(), "problem set loaded");
    Ok(problems)
}

/// Split one CSV record into fields, honoring double-quoted fields with
/// embedded commas and doubled-quote escapes.
fn split_record(record: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = record.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' if field.is_empty() => in_quotes = true,
            ',' if !in_quotes => fields.push(std::mem::take(&mut field)),
            _ => field.push(ch),
        }
    }
    fields.push(field);
    fields
}
