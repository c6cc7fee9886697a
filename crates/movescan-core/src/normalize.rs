//! Line normalization: the canonical form every comparison uses.

/// Canonicalize a line for comparison.
///
/// Strips leading/trailing whitespace and collapses every internal run
/// of whitespace (spaces, tabs, newlines) to a single ASCII space.
/// Idempotent: normalizing an already-normalized line is a no-op.
pub fn normalize_line(line: &str) -> String {
    line.split_whitespace().collect::<Vec<_>>().join(" ")
}
