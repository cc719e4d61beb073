//! Error types for filter evaluation and JSON input handling.

use crate::types::ValueKind;
use thiserror::Error;

/// Errors produced while tokenizing or evaluating a filter against a value.
///
/// Every variant is recoverable: callers are expected to show the message
/// to the user and keep their previous result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    /// The path text does not follow the bracket/dot grammar.
    #[error("Malformed path '{path}': {reason}")]
    MalformedPath { path: String, reason: String },

    /// A segment was applied to `null`.
    #[error("Cannot access {segment} on null")]
    NullTraversal { segment: String },

    /// A segment's structural requirement was not met by the value's tag.
    #[error("Cannot {context}: expected {expected}, found {actual}")]
    TypeMismatch {
        expected: ValueKind,
        actual: ValueKind,
        context: String,
    },

    /// Object key access on a key that does not exist.
    #[error("Key \"{0}\" not found")]
    KeyNotFound(String),

    /// Array index access past the end of the array.
    #[error("Index {index} out of bounds for array of length {length}")]
    IndexOutOfBounds { index: usize, length: usize },

    /// Stage text matched neither a special function nor a path.
    #[error("Unsupported filter: {0}")]
    UnsupportedExpression(String),
}

/// Errors from the string-in convenience entry points.
#[derive(Error, Debug)]
pub enum TreepathError {
    /// The input text was not valid JSON. Blocks all filter evaluation.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// The filter failed against a successfully parsed value.
    #[error(transparent)]
    Filter(#[from] FilterError),
}

/// Convenience alias used throughout treepath-core.
pub type Result<T> = std::result::Result<T, FilterError>;
