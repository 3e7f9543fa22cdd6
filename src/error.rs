//! Error types for shprust library

use std::io;
use thiserror::Error;

/// Main error type for shprust operations
#[derive(Debug, Error)]
pub enum ShpError {
    /// IO error occurred while reading the byte source
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A read needed more bytes than remain in the stream, including a
    /// source shorter than the 100-byte header
    #[error("Unexpected end of data at offset {offset}: needed {needed} bytes, {available} available")]
    UnexpectedEndOfData {
        offset: u64,
        needed: usize,
        available: usize,
    },

    /// Shape type code that is recognized but not decoded, or not recognized at all
    #[error("Unsupported shape type: {0}")]
    UnsupportedShapeType(i32),

    /// Counts or part indices that are structurally inconsistent
    #[error("Malformed geometry: {0}")]
    MalformedGeometry(String),

    /// Generic error with custom message
    #[error("{0}")]
    Custom(String),
}

impl ShpError {
    /// Whether the error came from running out of bytes.
    pub fn is_truncation(&self) -> bool {
        matches!(self, ShpError::UnexpectedEndOfData { .. })
    }
}

/// Result type alias for shprust operations
pub type Result<T> = std::result::Result<T, ShpError>;

impl From<String> for ShpError {
    fn from(s: String) -> Self {
        ShpError::Custom(s)
    }
}

impl From<&str> for ShpError {
    fn from(s: &str) -> Self {
        ShpError::Custom(s.to_string())
    }
}
