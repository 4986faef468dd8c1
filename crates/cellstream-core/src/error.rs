//! Error types for cellstream core.

use thiserror::Error;

use crate::kind::StreamKind;

/// Errors raised by stream operations.
///
/// Every operation validates before it mutates, so an error never leaves a
/// stream half-updated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StreamError {
    /// Two streams of different kinds met in a compare, diff, or merge.
    #[error("type mismatch: expected {expected} stream, got {found} stream")]
    TypeMismatch {
        expected: StreamKind,
        found: StreamKind,
    },

    /// A canonical cell could not be decoded.
    #[error("decoding error: {0}")]
    Decoding(String),
}

/// Result type for core stream operations.
pub type Result<T> = std::result::Result<T, StreamError>;
