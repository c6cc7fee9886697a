//! Error types for the report layer.

/// Errors that can occur while building a move report.
///
/// Both variants cover the same condition on different inputs: the
/// file produced zero lines, whether because it is missing, not
/// readable, or genuinely empty. The display strings are part of the
/// CLI's JSON contract.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum AnalyzeError {
    /// The old file could not be read (or contained no lines).
    #[error("Cannot read old file: {0}")]
    UnreadableOldFile(String),

    /// The new file could not be read (or contained no lines).
    #[error("Cannot read new file: {0}")]
    UnreadableNewFile(String),
}

/// Convenience alias for report results.
pub type AnalyzeResult<T> = Result<T, AnalyzeError>;
