//! Report layer for movescan.
//!
//! The boundary between the pure move-detection core and the outside
//! world: reads line sequences from disk (best-effort, lossy), runs
//! the matcher and block assembler, and builds the serializable report
//! types the CLI emits.
//!
//! # Key Types
//!
//! - [`MoveReport`] — Successful analysis result
//! - [`ErrorReport`] — JSON body for unreadable-input failures
//! - [`AnalyzeError`] — Typed failure for unreadable inputs
//! - [`AnalyzeOptions`] — Per-run options

pub mod error;
pub mod reader;
pub mod report;

pub use error::{AnalyzeError, AnalyzeResult};
pub use reader::read_lines;
pub use report::{analyze_files, AnalyzeOptions, ErrorReport, MoveReport};
