//! Error types for RenderCore
//!
//! The transform and camera API is infallible (out-of-range values are
//! clamped). Errors only come from helpers that consume caller-supplied
//! mesh data, such as smooth-normal generation.

use std::fmt;

/// Result type for RenderCore operations
pub type Result<T> = std::result::Result<T, Error>;

/// RenderCore errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// A face references a vertex index that does not exist
    IndexOutOfBounds {
        /// Offending vertex index
        index: usize,
        /// Number of vertices available
        len: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::IndexOutOfBounds { index, len } => {
                write!(f, "Index out of bounds: vertex {} requested, {} available", index, len)
            }
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
