//! # lzwkit: Pure Rust LZW Compression
//!
//! This crate provides variable-width LZW (Lempel-Ziv-Welch) compression and
//! decompression with the boundary behavior of both GIF and TIFF streams.
//!
//! ## Features
//!
//! - **Pure Rust**: No C dependencies, 100% safe Rust
//! - **Both bit orders**: MSB-first (TIFF) and LSB-first (GIF)
//! - **9-12 bit codes**: Width grows as the table fills, clear code at 4096
//! - **TIFF quirks**: Early code change, and strips without a trailing EOI
//! - **Observers**: Watch every code written or read without touching the
//!   codec's control flow
//!
//! ## Stream format
//!
//! - `clear_code = 1 << initial_code_width`, `eoi_code = clear_code + 1`
//! - Every stream starts with a clear code and ends with EOI
//! - Codes start at `initial_code_width + 1` bits and grow to 12 bits
//! - A full table is reset by emitting another clear code
//!
//! ## Example
//!
//! ```rust
//! use lzwkit::{compress_tiff, decompress_tiff};
//!
//! let original = b"TOBEORNOTTOBEORTOBEORNOT";
//!
//! // Compress
//! let compressed = compress_tiff(original).unwrap();
//!
//! // Decompress
//! let decompressed = decompress_tiff(&compressed, original.len()).unwrap();
//!
//! assert_eq!(decompressed, original);
//! ```
//!
//! ## Custom configurations
//!
//! ```rust
//! use lzwkit::{ByteOrder, LzwConfig, compress, decompress};
//!
//! // 4-bit palette indices, LSB-first, GIF-style
//! let config = LzwConfig::new(4, ByteOrder::LsbFirst);
//! let pixels = [1u8, 1, 1, 1, 7, 7, 15, 0, 1, 1];
//!
//! let compressed = compress(&pixels, config).unwrap();
//! let decompressed = decompress(&compressed, pixels.len(), config).unwrap();
//! assert_eq!(decompressed, pixels);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod config;
mod decoder;
mod dictionary;
mod encoder;
mod error;
mod observer;

pub use config::{LzwConfig, MAX_CODE_WIDTH, MAX_ENTRIES};
pub use decoder::LzwDecoder;
pub use encoder::LzwEncoder;
pub use error::{LzwError, Result};
pub use lzwkit_core::ByteOrder;
pub use observer::{CodeObserver, CodeRecorder, NoopObserver};

/// Decompress LZW-compressed data with the given configuration.
///
/// # Parameters
///
/// - `data`: LZW-compressed input
/// - `expected_size`: Expected size of decompressed output
/// - `config`: LZW configuration (TIFF, GIF or custom)
///
/// # Example
///
/// ```rust
/// use lzwkit::{decompress, compress, LzwConfig};
///
/// let original = b"Hello, World!";
/// let compressed = compress(original, LzwConfig::GIF).unwrap();
/// let decompressed = decompress(&compressed, original.len(), LzwConfig::GIF).unwrap();
/// assert_eq!(decompressed, original);
/// ```
pub fn decompress(data: &[u8], expected_size: usize, config: LzwConfig) -> Result<Vec<u8>> {
    let mut decoder = LzwDecoder::new(config)?;
    decoder.decode(data, expected_size)
}

/// Compress data with LZW using the given configuration.
///
/// # Example
///
/// ```rust
/// use lzwkit::{compress, LzwConfig};
///
/// let data = b"TOBEORNOTTOBEORTOBEORNOT";
/// let compressed = compress(data, LzwConfig::TIFF).unwrap();
/// assert!(compressed.len() < data.len());
/// ```
pub fn compress(data: &[u8], config: LzwConfig) -> Result<Vec<u8>> {
    let mut encoder = LzwEncoder::new(config)?;
    encoder.encode(data)
}

/// Decompress TIFF LZW data (convenience function).
///
/// This is equivalent to `decompress(data, expected_size, LzwConfig::TIFF)`.
pub fn decompress_tiff(data: &[u8], expected_size: usize) -> Result<Vec<u8>> {
    decompress(data, expected_size, LzwConfig::TIFF)
}

/// Compress data with TIFF LZW (convenience function).
///
/// This is equivalent to `compress(data, LzwConfig::TIFF)`.
pub fn compress_tiff(data: &[u8]) -> Result<Vec<u8>> {
    compress(data, LzwConfig::TIFF)
}

/// Decompress GIF LZW data with an 8-bit minimum code size.
pub fn decompress_gif(data: &[u8], expected_size: usize) -> Result<Vec<u8>> {
    decompress(data, expected_size, LzwConfig::GIF)
}

/// Compress data with GIF LZW and an 8-bit minimum code size.
pub fn compress_gif(data: &[u8]) -> Result<Vec<u8>> {
    compress(data, LzwConfig::GIF)
}
