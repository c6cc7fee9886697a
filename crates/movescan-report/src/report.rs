//! Move-report construction: orchestrates the core pipeline over two
//! files and packages the result for serialization.

use std::path::Path;

use serde::Serialize;
use tracing::debug;

use movescan_core::{assemble_blocks, find_matches, Block, LineMatch};

use crate::error::{AnalyzeError, AnalyzeResult};
use crate::reader::read_lines;

/// Per-run options.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnalyzeOptions {
    /// Similarity threshold in `[0.0, 1.0]`.
    ///
    /// Accepted for caller compatibility but not consumed: matching is
    /// exact-equality only. Reserved for a fuzzy-match path scored with
    /// `movescan_core::similarity`.
    pub threshold: f64,
}

impl Default for AnalyzeOptions {
    fn default() -> Self {
        Self { threshold: 0.7 }
    }
}

/// The result of analyzing two file versions for moved regions.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MoveReport {
    /// The old file path, as given by the caller.
    pub old_file: String,
    /// The new file path, as given by the caller.
    pub new_file: String,
    /// Number of moved blocks detected.
    pub block_count: usize,
    /// Total matched lines across all blocks.
    pub total_lines: usize,
    /// The blocks, ascending by `old_start`.
    pub blocks: Vec<Block>,
}

/// JSON body emitted when an input cannot be read. Both list fields
/// are always present (and empty) so consumers see a stable shape.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ErrorReport {
    /// Human-readable failure message.
    pub error: String,
    /// Always empty.
    pub matches: Vec<LineMatch>,
    /// Always empty.
    pub blocks: Vec<Block>,
}

impl ErrorReport {
    /// Build the error body for a failed analysis.
    pub fn from_error(err: &AnalyzeError) -> Self {
        Self {
            error: err.to_string(),
            matches: Vec::new(),
            blocks: Vec::new(),
        }
    }
}

/// Analyze two file versions and report likely-moved regions.
///
/// Reads both files (lossy; see [`read_lines`]), matches lines by
/// normalized content, and folds the matches into blocks. An input
/// that yields zero lines — missing, unreadable, or genuinely empty —
/// is a terminal error; the old file is checked first.
pub fn analyze_files(
    old_file: &str,
    new_file: &str,
    options: &AnalyzeOptions,
) -> AnalyzeResult<MoveReport> {
    let old_lines = read_lines(Path::new(old_file));
    if old_lines.is_empty() {
        return Err(AnalyzeError::UnreadableOldFile(old_file.to_string()));
    }

    let new_lines = read_lines(Path::new(new_file));
    if new_lines.is_empty() {
        return Err(AnalyzeError::UnreadableNewFile(new_file.to_string()));
    }

    debug!(
        old_lines = old_lines.len(),
        new_lines = new_lines.len(),
        threshold = options.threshold,
        "analyzing file pair"
    );

    let matches = find_matches(&old_lines, &new_lines);
    let blocks = assemble_blocks(&matches);
    let total_lines = blocks.iter().map(|b| b.line_count).sum();

    debug!(
        matches = matches.len(),
        blocks = blocks.len(),
        total_lines, "assembled move blocks"
    );

    Ok(MoveReport {
        old_file: old_file.to_string(),
        new_file: new_file.to_string(),
        block_count: blocks.len(),
        total_lines,
        blocks,
    })
}
