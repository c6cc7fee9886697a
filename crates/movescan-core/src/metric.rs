//! String metric: Levenshtein edit distance and a normalized
//! similarity ratio.
//!
//! Lengths are counted in Unicode scalar values throughout, so the
//! metric is byte-encoding independent.

/// Minimum number of single-character insertions, deletions, and
/// substitutions needed to transform `a` into `b`.
///
/// Classical Levenshtein recurrence with unit costs, computed with a
/// rolling pair of rows keyed on the shorter string, so space is
/// O(min(len)) while time stays O(len(a) * len(b)). Symmetric in its
/// arguments.
pub fn edit_distance(a: &str, b: &str) -> usize {
    // Keep the shorter string as the inner (row) dimension.
    let (outer, inner) = if a.chars().count() >= b.chars().count() {
        (a, b)
    } else {
        (b, a)
    };
    let inner: Vec<char> = inner.chars().collect();

    if inner.is_empty() {
        return outer.chars().count();
    }

    let mut prev: Vec<usize> = (0..=inner.len()).collect();
    let mut curr: Vec<usize> = vec![0; inner.len() + 1];

    for (i, c1) in outer.chars().enumerate() {
        curr[0] = i + 1;
        for (j, &c2) in inner.iter().enumerate() {
            let insertion = prev[j + 1] + 1;
            let deletion = curr[j] + 1;
            let substitution = prev[j] + usize::from(c1 != c2);
            curr[j + 1] = insertion.min(deletion).min(substitution);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[inner.len()]
}

/// Similarity ratio between two strings in `[0.0, 1.0]`.
///
/// `1.0` when both are empty, `0.0` when exactly one is empty,
/// otherwise `1 - edit_distance / max(len)`. Total over any inputs.
pub fn similarity(a: &str, b: &str) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let max_len = a.chars().count().max(b.chars().count());
    1.0 - (edit_distance(a, b) as f64 / max_len as f64)
}
