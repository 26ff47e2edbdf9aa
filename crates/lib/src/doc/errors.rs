//! Error types for document operations.
//!
//! Document traversal and mutation are total for well-formed inputs; the
//! variants here cover the places where a caller asked for a value of the
//! wrong kind, navigated through a scalar, or indexed past the end of a list.

use thiserror::Error;

/// Structured error types for document operations.
#[non_exhaustive]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DocError {
    /// A value had a different kind than the operation expected
    #[error("type mismatch: expected {expected}, found {actual}")]
    TypeMismatch { expected: String, actual: String },

    /// A dot-path was empty or could not be navigated
    #[error("invalid path: {path}")]
    InvalidPath { path: String },

    /// List index was past the end of the list
    #[error("list index {index} out of bounds (len {len})")]
    IndexOutOfBounds { index: usize, len: usize },

    /// A key was required but not present in the document
    #[error("field not found: {key}")]
    FieldNotFound { key: String },
}

impl DocError {
    /// Check if this error is related to type mismatches
    pub fn is_type_error(&self) -> bool {
        matches!(self, DocError::TypeMismatch { .. })
    }

    /// Check if this error is related to field lookup
    pub fn is_not_found(&self) -> bool {
        matches!(self, DocError::FieldNotFound { .. })
    }

    /// Get the path if this is a path-related error
    pub fn path(&self) -> Option<&str> {
        match self {
            DocError::InvalidPath { path } => Some(path),
            _ => None,
        }
    }
}

// Conversion from DocError to the main Error type
impl From<DocError> for crate::Error {
    fn from(err: DocError) -> Self {
        crate::Error::Doc(err)
    }
}
