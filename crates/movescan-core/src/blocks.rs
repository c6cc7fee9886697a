//! Block assembly: fold line-level matches into contiguous moved
//! regions.
//!
//! A single accumulator walks the matches in old-line order. A match
//! extends the current block when the gap on both sides is small and
//! strictly forward, and the two gaps do not diverge by more than
//! [`MAX_GAP_DRIFT`] lines. Blocks with fewer than [`MIN_BLOCK_LINES`]
//! matches are discarded.

use serde::Serialize;

use crate::matcher::LineMatch;

/// Largest line gap (on either side) that still merges a match into
/// the current block.
pub const MAX_MERGE_GAP: i64 = 4;

/// Largest allowed divergence between the old-side and new-side gaps.
/// Rejects stitching unrelated sections together when both gaps happen
/// to be individually small.
pub const MAX_GAP_DRIFT: i64 = 2;

/// Minimum number of matched lines for a block to be reported.
pub const MIN_BLOCK_LINES: usize = 2;

/// A contiguous run of matches representing a likely-moved region.
/// All line numbers are 1-based and inclusive. Lines strictly inside a
/// merged gap are not matched individually but are covered by the
/// start/end range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Block {
    /// First matched line in the old file.
    pub old_start: usize,
    /// Last matched line in the old file.
    pub old_end: usize,
    /// First matched line in the new file.
    pub new_start: usize,
    /// Last matched line in the new file.
    pub new_end: usize,
    /// Number of matches folded into this block.
    pub line_count: usize,
}

impl Block {
    fn from_match(m: &LineMatch) -> Self {
        Self {
            old_start: m.old_line,
            old_end: m.old_line,
            new_start: m.new_line,
            new_end: m.new_line,
            line_count: 1,
        }
    }

    /// Whether `m` continues this block: strictly forward on both
    /// sides, both gaps within [`MAX_MERGE_GAP`], and the gaps within
    /// [`MAX_GAP_DRIFT`] of each other.
    fn accepts(&self, m: &LineMatch) -> bool {
        let old_gap = m.old_line as i64 - self.old_end as i64;
        let new_gap = m.new_line as i64 - self.new_end as i64;

        let close_enough =
            (1..=MAX_MERGE_GAP).contains(&old_gap) && (1..=MAX_MERGE_GAP).contains(&new_gap);
        let gap_consistent = (old_gap - new_gap).abs() <= MAX_GAP_DRIFT;

        close_enough && gap_consistent
    }

    fn extend(&mut self, m: &LineMatch) {
        self.old_end = m.old_line;
        self.new_end = m.new_line;
        self.line_count += 1;
    }
}

/// Fold matches into blocks.
///
/// Matches are processed in `old_line` order (the input is re-sorted,
/// so any ordering is accepted). The output is ordered by `old_start`
/// ascending and contains only blocks of at least [`MIN_BLOCK_LINES`]
/// matches; isolated single-line matches are dropped.
pub fn assemble_blocks(matches: &[LineMatch]) -> Vec<Block> {
    let mut ordered: Vec<&LineMatch> = matches.iter().collect();
    ordered.sort_by_key(|m| m.old_line);

    let mut iter = ordered.into_iter();
    let Some(first) = iter.next() else {
        return Vec::new();
    };

    let mut blocks = Vec::new();
    let mut current = Block::from_match(first);

    for m in iter {
        if current.accepts(m) {
            current.extend(m);
        } else {
            if current.line_count >= MIN_BLOCK_LINES {
                blocks.push(current);
            }
            current = Block::from_match(m);
        }
    }

    if current.line_count >= MIN_BLOCK_LINES {
        blocks.push(current);
    }

    blocks
}
