//! Error types for motif enumeration and counting.

use thiserror::Error;

/// Library result type alias.
pub type Result<T> = std::result::Result<T, MotifError>;

/// Errors surfaced by parsing, canonicalization and the size guards.
#[derive(Error, Debug)]
pub enum MotifError {
    /// Malformed input text (bad integer, wrong number of fields on a line).
    #[error("Invalid input on line {line}: {message}")]
    InvalidInput { line: usize, message: String },

    /// Edge endpoint outside the dense vertex range `0..size`.
    #[error("Vertex {vertex} out of range for a graph on {size} vertices")]
    VertexOutOfRange { vertex: usize, size: usize },

    /// Requested size is beyond the configured computable ceiling.
    #[error("{what} size {size} exceeds the configured limit of {limit}")]
    SizeTooLarge {
        what: &'static str,
        size: usize,
        limit: usize,
    },

    /// IO error while reading input or writing a report.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl MotifError {
    pub(crate) fn invalid_input(line: usize, message: impl Into<String>) -> Self {
        MotifError::InvalidInput {
            line,
            message: message.into(),
        }
    }
}
