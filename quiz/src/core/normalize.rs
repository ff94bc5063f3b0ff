//! Answer normalization.

/// Normalize a raw answer line for comparison: strip surrounding whitespace
/// (including any line terminator the reader left behind) and case-fold.
///
/// Pure and idempotent: normalizing the same input twice yields the same
/// string. Both the given and the expected answer go through this before
/// comparison, so correctness is insensitive to case and padding.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}
