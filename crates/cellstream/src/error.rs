//! Error types for the cellstream surface.

use cellstream_core::StreamError;
use thiserror::Error;

/// Errors that can occur at the binding surface.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SurfaceError {
    /// Error from a core stream operation.
    #[error("stream error: {0}")]
    Stream(#[from] StreamError),

    /// A host value of the wrong shape was passed to an operation.
    #[error("type mismatch: {operation} does not accept {found} values")]
    InvalidInput {
        operation: &'static str,
        found: &'static str,
    },
}

impl SurfaceError {
    /// Check if this is a caller type error (wrong stream kind or wrong
    /// host value shape).
    pub fn is_type_mismatch(&self) -> bool {
        matches!(
            self,
            SurfaceError::InvalidInput { .. }
                | SurfaceError::Stream(StreamError::TypeMismatch { .. })
        )
    }
}

/// Result type for surface operations.
pub type Result<T> = std::result::Result<T, SurfaceError>;
