//! Move-detection core for movescan.
//!
//! Finds regions of a file that moved between two versions. Lines are
//! normalized, matched one-to-one by exact normalized content, and the
//! resulting line-level matches are folded into contiguous blocks with
//! a gap-tolerance heuristic. Everything in this crate is a pure,
//! total computation over in-memory line sequences.
//!
//! # Key Types
//!
//! - [`LineMatch`] — A single old-line/new-line correspondence
//! - [`Block`] — A contiguous run of matches representing a moved region
//!
//! # Pipeline
//!
//! `find_matches` produces matches ordered by old line number;
//! `assemble_blocks` folds them into blocks. [`normalize_line`] and the
//! metric functions are exposed for callers that want the pieces.

pub mod blocks;
pub mod matcher;
pub mod metric;
pub mod normalize;

pub use blocks::{assemble_blocks, Block, MAX_GAP_DRIFT, MAX_MERGE_GAP, MIN_BLOCK_LINES};
pub use matcher::{find_matches, LineMatch, MIN_CONTENT_LEN};
pub use metric::{edit_distance, similarity};
pub use normalize::normalize_line;
