//! Network file error types.

use std::path::PathBuf;

use crate::domain::InvalidLineId;

/// Errors that can occur when reading a network description.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The file could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A line starting with a digit is not a valid line number
    #[error("line {line_no}: {source}")]
    InvalidLineId {
        line_no: usize,
        source: InvalidLineId,
    },

    /// A line number is the last line of the file
    #[error("line {line_no}: line number is not followed by a name")]
    MissingName { line_no: usize },
}
