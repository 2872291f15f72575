//! # lzwkit Core
//!
//! Bit-level building blocks for the lzwkit LZW codec.
//!
//! - [`bitstream`]: `BitReader`/`BitWriter` for variable-width codes in
//!   MSB-first (TIFF) or LSB-first (GIF) order
//! - [`error`]: Error types
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ L4: Command line                                        │
//! │     lzw compress / decompress / inspect                 │
//! ├─────────────────────────────────────────────────────────┤
//! │ L2: Codec                                               │
//! │     LZW encoder/decoder, dictionaries, observers        │
//! ├─────────────────────────────────────────────────────────┤
//! │ L1: BitStream (this crate)                              │
//! │     BitReader/BitWriter, byte order                     │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use lzwkit_core::{BitReader, ByteOrder, ReadOutcome};
//!
//! let data = [0xAB, 0xCD];
//! let mut reader = BitReader::new(&data[..], ByteOrder::MsbFirst);
//! assert_eq!(reader.read_bits(12).unwrap(), ReadOutcome::Code(0xABC));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod bitstream;
pub mod error;

// Re-exports for convenience
pub use bitstream::{BitReader, BitWriter, ByteOrder, MAX_BIT_COUNT, ReadOutcome, TIFF_EOI_CODE};
pub use error::{BitstreamError, Result};
