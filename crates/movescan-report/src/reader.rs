//! Best-effort line reading.

use std::fs;
use std::path::Path;

/// Read a file as a sequence of lines.
///
/// The content is decoded as UTF-8 with undecodable byte sequences
/// replaced by U+FFFD, so binary garbage never fails the read. A
/// missing or unreadable file yields an empty sequence; the caller
/// decides whether zero lines is an error.
pub fn read_lines(path: &Path) -> Vec<String> {
    match fs::read(path) {
        Ok(bytes) => String::from_utf8_lossy(&bytes)
            .lines()
            .map(str::to_owned)
            .collect(),
        Err(_) => Vec::new(),
    }
}
