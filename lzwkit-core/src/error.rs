//! Error types for bit-level stream operations.

use std::io;
use thiserror::Error;

/// Errors raised by [`BitReader`](crate::BitReader) and
/// [`BitWriter`](crate::BitWriter).
#[derive(Debug, Error)]
pub enum BitstreamError {
    /// I/O error from the underlying reader/writer.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The byte source ran dry before the requested bits could be filled.
    #[error("Premature end of data after {bytes_read} bytes")]
    PrematureEndOfData {
        /// Bytes consumed from the source before it was exhausted.
        bytes_read: u64,
    },

    /// A bit count outside `1..=16` was requested.
    #[error("Invalid bit count: {0} (must be 1-16)")]
    InvalidBitCount(u8),
}

/// Result type alias for bit stream operations.
pub type Result<T> = std::result::Result<T, BitstreamError>;

impl BitstreamError {
    /// Create a premature end-of-data error.
    pub fn premature_end(bytes_read: u64) -> Self {
        Self::PrematureEndOfData { bytes_read }
    }
}
