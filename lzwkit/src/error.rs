//! LZW-specific error types.

use lzwkit_core::BitstreamError;
use thiserror::Error;

/// LZW compression/decompression errors.
#[derive(Debug, Error)]
pub enum LzwError {
    /// Initial code width outside the supported range.
    #[error("Invalid initial code width: {0} (must be 2-8)")]
    InvalidCodeWidth(u8),

    /// The encoder could not find a run it had already matched.
    ///
    /// This is an internal invariant violation, never caused by input.
    #[error("Dictionary lookup failed for a {run_len}-byte run")]
    DictionaryLookupFailure {
        /// Length of the run that was looked up.
        run_len: usize,
    },

    /// A code outside the currently valid range was read.
    #[error("Corrupt LZW stream: code {code} with table size {table_size}")]
    CorruptStreamCode {
        /// The offending code.
        code: u16,
        /// Number of entries in the table when the code was read.
        table_size: usize,
    },

    /// The decode table would grow past its maximum size.
    #[error("Code table overflow (max {max_entries} entries)")]
    TableOverflow {
        /// Maximum number of entries allowed.
        max_entries: usize,
    },

    /// The stream ended before a complete code could be read.
    #[error("Premature end of data after {bytes_read} bytes")]
    PrematureEndOfData {
        /// Bytes consumed before the source was exhausted.
        bytes_read: u64,
    },

    /// The stream opened with a data code instead of a clear code.
    #[error("Missing leading clear code (found code {code})")]
    MissingClearCode {
        /// The first code in the stream.
        code: u16,
    },

    /// An input byte has no literal code at the configured width.
    #[error("Byte {byte} has no literal code (clear code is {clear_code})")]
    LiteralOutOfRange {
        /// The offending byte.
        byte: u8,
        /// Clear code of the configuration.
        clear_code: u16,
    },

    /// Invalid bit count passed to the bit stream.
    #[error("Invalid bit count: {0}")]
    InvalidBitCount(u8),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<BitstreamError> for LzwError {
    fn from(err: BitstreamError) -> Self {
        match err {
            BitstreamError::Io(e) => Self::Io(e),
            BitstreamError::PrematureEndOfData { bytes_read } => {
                Self::PrematureEndOfData { bytes_read }
            }
            BitstreamError::InvalidBitCount(count) => Self::InvalidBitCount(count),
        }
    }
}

/// Result type for LZW operations.
pub type Result<T> = std::result::Result<T, LzwError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bitstream_error_mapping() {
        let err: LzwError = BitstreamError::premature_end(7).into();
        assert!(matches!(err, LzwError::PrematureEndOfData { bytes_read: 7 }));

        let err: LzwError = BitstreamError::InvalidBitCount(0).into();
        assert!(matches!(err, LzwError::InvalidBitCount(0)));
    }

    #[test]
    fn test_corrupt_code_display() {
        let err = LzwError::CorruptStreamCode {
            code: 300,
            table_size: 260,
        };
        let message = err.to_string();
        assert!(message.contains("300"));
        assert!(message.contains("260"));
    }
}
