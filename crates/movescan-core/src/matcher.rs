//! Exact-match indexer: one-to-one line correspondences between two
//! files.
//!
//! Builds a content -> line-numbers index over the new file's
//! normalized lines, then walks the old file claiming the first
//! unclaimed candidate for each line. Matching is exact
//! (post-normalization) equality; each new line is claimed at most
//! once and self-pairs (same line number on both sides) are skipped.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::normalize::normalize_line;

/// Normalized lines shorter than this many scalar values are excluded
/// from matching entirely. Trivial lines like `}` or `end` would
/// otherwise produce spurious correspondences.
pub const MIN_CONTENT_LEN: usize = 5;

/// A correspondence between one old-file line and one new-file line
/// with identical normalized content. Line numbers are 1-based.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct LineMatch {
    /// Line number in the old file.
    pub old_line: usize,
    /// Line number in the new file.
    pub new_line: usize,
    /// Content similarity of the pair. Always `1.0` for exact matches.
    pub similarity: f64,
}

/// Find one-to-one line correspondences between two line sequences.
///
/// Old lines are visited in ascending order; for each qualifying line
/// the lowest-numbered unclaimed new line with identical normalized
/// content wins, and at most one match is emitted per old line. Old
/// lines with no unclaimed candidate simply produce no match. The
/// result is ordered by `old_line` ascending.
///
/// Expected O(old + new): each old line scans only same-content
/// candidates and claims are monotone.
pub fn find_matches(old_lines: &[String], new_lines: &[String]) -> Vec<LineMatch> {
    // content -> new-file line numbers, ascending.
    let mut index: HashMap<String, Vec<usize>> = HashMap::new();
    for (i, raw) in new_lines.iter().enumerate() {
        let content = normalize_line(raw);
        if content.chars().count() >= MIN_CONTENT_LEN {
            index.entry(content).or_default().push(i + 1);
        }
    }

    let mut matches = Vec::new();
    let mut used_new: HashSet<usize> = HashSet::new();

    for (i, raw) in old_lines.iter().enumerate() {
        let old_line = i + 1;
        let content = normalize_line(raw);
        if content.chars().count() < MIN_CONTENT_LEN {
            continue;
        }

        let Some(candidates) = index.get(&content) else {
            continue;
        };
        for &new_line in candidates {
            if !used_new.contains(&new_line) && new_line != old_line {
                matches.push(LineMatch {
                    old_line,
                    new_line,
                    similarity: 1.0,
                });
                used_new.insert(new_line);
                break;
            }
        }
    }

    matches
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn empty_inputs_no_matches() {
        assert!(find_matches(&[], &[]).is_empty());
        assert!(find_matches(&lines(&["alpha one"]), &[]).is_empty());
    }

    #[test]
    fn moved_line_is_matched() {
        let old = lines(&["alpha one", "short"]);
        let new = lines(&["filler line", "alpha one"]);

        let matches = find_matches(&old, &new);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].old_line, 1);
        assert_eq!(matches[0].new_line, 2);
        assert_eq!(matches[0].similarity, 1.0);
    }

    #[test]
    fn self_pair_is_skipped() {
        // Identical files: every candidate sits on the same line number.
        let content = lines(&["function foo() {", "  return 1;", "}"]);
        let matches = find_matches(&content, &content);
        assert!(matches.is_empty());
    }

    #[test]
    fn short_lines_are_excluded() {
        // "end" and "}" normalize to fewer than five characters.
        let old = lines(&["end", "}", "  ab  "]);
        let new = lines(&["filler", "end", "}", "ab"]);
        assert!(find_matches(&old, &new).is_empty());
    }

    #[test]
    fn length_threshold_counts_normalized_content() {
        // Raw line is long but normalizes to four characters.
        let old = lines(&["   a  b   "]);
        let new = lines(&["x", "a b"]);
        assert!(find_matches(&old, &new).is_empty());
    }

    #[test]
    fn each_new_line_claimed_at_most_once() {
        // Two old copies, one new copy: only the first old line matches.
        let old = lines(&["duplicate line", "duplicate line"]);
        let new = lines(&["filler", "filler", "duplicate line"]);

        let matches = find_matches(&old, &new);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].old_line, 1);
        assert_eq!(matches[0].new_line, 3);
    }

    #[test]
    fn lowest_numbered_unclaimed_candidate_wins() {
        let old = lines(&["duplicate line", "duplicate line"]);
        let new = lines(&["filler", "duplicate line", "filler", "duplicate line"]);

        let matches = find_matches(&old, &new);
        assert_eq!(matches.len(), 2);
        assert_eq!((matches[0].old_line, matches[0].new_line), (1, 2));
        assert_eq!((matches[1].old_line, matches[1].new_line), (2, 4));
    }

    #[test]
    fn self_pair_candidate_falls_through_to_next() {
        // Old line 2 first sees new line 2 (self-pair) and must take
        // the next unclaimed copy instead.
        let old = lines(&["aaaaa", "shared content", "bbbbb"]);
        let new = lines(&["ccccc", "shared content", "ddddd", "shared content"]);

        let matches = find_matches(&old, &new);
        assert_eq!(matches.len(), 1);
        assert_eq!((matches[0].old_line, matches[0].new_line), (2, 4));
    }

    #[test]
    fn matches_ordered_by_old_line() {
        let old = lines(&["gamma three", "alpha one", "beta two!"]);
        let new = lines(&["alpha one", "beta two!", "gamma three", "extra"]);

        let matches = find_matches(&old, &new);
        let old_order: Vec<usize> = matches.iter().map(|m| m.old_line).collect();
        let mut sorted = old_order.clone();
        sorted.sort_unstable();
        assert_eq!(old_order, sorted);
    }

    #[test]
    fn no_new_line_appears_twice() {
        let old = lines(&["alpha one", "alpha one", "alpha one"]);
        let new = lines(&["alpha one", "alpha one", "filler!"]);

        let matches = find_matches(&old, &new);
        let mut seen = std::collections::HashSet::new();
        for m in &matches {
            assert!(seen.insert(m.new_line), "new line {} claimed twice", m.new_line);
            assert_ne!(m.old_line, m.new_line);
        }
    }

    #[test]
    fn whitespace_differences_still_match() {
        let old = lines(&["    let x = 1;"]);
        let new = lines(&["filler", "let  x\t= 1;"]);

        let matches = find_matches(&old, &new);
        assert_eq!(matches.len(), 1);
        assert_eq!((matches[0].old_line, matches[0].new_line), (1, 2));
    }
}
