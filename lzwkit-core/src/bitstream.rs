//! Bit-level I/O for variable-width LZW codes.
//!
//! This module provides `BitReader` and `BitWriter`, which pack and unpack
//! unsigned codes of 1 to 16 bits into a byte stream. Unlike DEFLATE, LZW
//! containers disagree on bit order, so both types take a [`ByteOrder`]:
//!
//! - [`ByteOrder::MsbFirst`] ("network", TIFF): new bytes enter the low end of
//!   the cache and codes are taken from the high end of the valid window.
//! - [`ByteOrder::LsbFirst`] ("Intel", GIF): new bytes are stacked above the
//!   bits already cached and codes are taken from the low end.
//!
//! A writer and a reader only agree with each other when they share the same
//! order. Mixing them does not fail, it just yields garbage codes.
//!
//! # Example
//!
//! ```
//! use lzwkit_core::bitstream::{BitReader, BitWriter, ByteOrder, ReadOutcome};
//!
//! let mut output = Vec::new();
//! let mut writer = BitWriter::new(&mut output, ByteOrder::MsbFirst);
//! writer.write_bits(256, 9).unwrap();
//! writer.write_bits(65, 9).unwrap();
//! writer.flush().unwrap();
//! assert_eq!(output, vec![0x80, 0x10, 0x40]);
//!
//! let mut reader = BitReader::new(&output[..], ByteOrder::MsbFirst);
//! assert_eq!(reader.read_bits(9).unwrap(), ReadOutcome::Code(256));
//! assert_eq!(reader.read_bits(9).unwrap(), ReadOutcome::Code(65));
//! ```

use crate::error::{BitstreamError, Result};
use std::io::{ErrorKind, Read, Write};

/// Largest bit count accepted by a single read or write.
pub const MAX_BIT_COUNT: u8 = 16;

/// End-of-information code that TIFF readers substitute when a strip ends
/// without one.
pub const TIFF_EOI_CODE: u16 = 257;

/// Bit order used to pack codes into bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ByteOrder {
    /// Most significant bit first (TIFF, "network" order).
    #[default]
    MsbFirst,
    /// Least significant bit first (GIF, "Intel" order).
    LsbFirst,
}

impl ByteOrder {
    /// Short lowercase name, as used on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Self::MsbFirst => "msb",
            Self::LsbFirst => "lsb",
        }
    }
}

/// Result of a successful [`BitReader::read_bits`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadOutcome {
    /// A complete code was assembled from the byte source.
    Code(u16),
    /// The source ran dry and the reader substituted its end-of-data
    /// sentinel. Only produced when a sentinel was configured.
    EndOfInput(u16),
}

impl ReadOutcome {
    /// The code value, whether read or substituted.
    pub fn value(self) -> u16 {
        match self {
            Self::Code(code) | Self::EndOfInput(code) => code,
        }
    }

    /// Whether this outcome was synthesized at end of input.
    pub fn is_end_of_input(self) -> bool {
        matches!(self, Self::EndOfInput(_))
    }
}

#[inline]
fn check_bit_count(count: u8) -> Result<()> {
    if count == 0 || count > MAX_BIT_COUNT {
        return Err(BitstreamError::InvalidBitCount(count));
    }
    Ok(())
}

#[inline]
fn low_mask(bits: u8) -> u32 {
    (1u32 << bits) - 1
}

/// A bit-level reader that wraps any `Read` implementation.
///
/// The cache is refilled one byte at a time, so no byte beyond the one that
/// completes the current code is ever pulled from the source.
#[derive(Debug)]
pub struct BitReader<R: Read> {
    /// Underlying reader.
    reader: R,
    /// Bit packing order.
    byte_order: ByteOrder,
    /// Bit cache; only the low `bits_in_cache` bits are meaningful.
    cache: u32,
    /// Number of valid bits in the cache.
    bits_in_cache: u8,
    /// Bytes physically consumed from the source.
    bytes_read: u64,
    /// Code returned instead of an error when the source is exhausted.
    eoi_sentinel: Option<u16>,
}

impl<R: Read> BitReader<R> {
    /// Create a new `BitReader` wrapping the given reader.
    pub fn new(reader: R, byte_order: ByteOrder) -> Self {
        Self {
            reader,
            byte_order,
            cache: 0,
            bits_in_cache: 0,
            bytes_read: 0,
            eoi_sentinel: None,
        }
    }

    /// Enable TIFF end-of-strip behavior: when the source runs out during a
    /// refill, report `ReadOutcome::EndOfInput(code)` instead of failing.
    pub fn with_eoi_sentinel(mut self, code: u16) -> Self {
        self.eoi_sentinel = Some(code);
        self
    }

    /// Get the configured byte order.
    pub fn byte_order(&self) -> ByteOrder {
        self.byte_order
    }

    /// Get a reference to the underlying reader.
    pub fn get_ref(&self) -> &R {
        &self.reader
    }

    /// Consume this `BitReader` and return the underlying reader.
    pub fn into_inner(self) -> R {
        self.reader
    }

    /// Total bytes consumed from the source so far.
    pub fn bytes_read(&self) -> u64 {
        self.bytes_read
    }

    /// Number of bits currently held in the cache.
    pub fn bits_in_cache(&self) -> u8 {
        self.bits_in_cache
    }

    /// Discard any partially consumed bits.
    pub fn reset_cache(&mut self) {
        self.cache = 0;
        self.bits_in_cache = 0;
    }

    fn next_byte(&mut self) -> Result<Option<u8>> {
        let mut byte = [0u8; 1];
        loop {
            match self.reader.read(&mut byte) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(byte[0])),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// Read a `count`-bit code (1-16 bits).
    ///
    /// Bits already in the cache are used first. If a refill finds the source
    /// empty, the configured sentinel is returned when present, otherwise
    /// `BitstreamError::PrematureEndOfData`.
    pub fn read_bits(&mut self, count: u8) -> Result<ReadOutcome> {
        check_bit_count(count)?;

        while self.bits_in_cache < count {
            let Some(byte) = self.next_byte()? else {
                return match self.eoi_sentinel {
                    Some(code) => Ok(ReadOutcome::EndOfInput(code)),
                    None => Err(BitstreamError::premature_end(self.bytes_read)),
                };
            };

            match self.byte_order {
                ByteOrder::MsbFirst => self.cache = (self.cache << 8) | u32::from(byte),
                ByteOrder::LsbFirst => self.cache |= u32::from(byte) << self.bits_in_cache,
            }
            self.bits_in_cache += 8;
            self.bytes_read += 1;
        }

        let mask = low_mask(count);
        let value = match self.byte_order {
            ByteOrder::MsbFirst => (self.cache >> (self.bits_in_cache - count)) & mask,
            ByteOrder::LsbFirst => {
                let value = self.cache & mask;
                self.cache >>= count;
                value
            }
        };

        self.bits_in_cache -= count;
        self.cache &= low_mask(self.bits_in_cache);

        Ok(ReadOutcome::Code(value as u16))
    }
}

/// A bit-level writer that wraps any `Write` implementation.
///
/// Complete bytes are forwarded to the sink as soon as they are formed.
/// [`flush`](Self::flush) must be called once at the end of a stream, or up
/// to seven trailing bits are lost.
#[derive(Debug)]
pub struct BitWriter<W: Write> {
    /// Underlying writer.
    writer: W,
    /// Bit packing order.
    byte_order: ByteOrder,
    /// Bit cache; only the low `bits_in_cache` bits are meaningful.
    cache: u32,
    /// Number of valid bits in the cache.
    bits_in_cache: u8,
    /// Bytes emitted to the sink.
    bytes_written: u64,
}

impl<W: Write> BitWriter<W> {
    /// Create a new `BitWriter` wrapping the given writer.
    pub fn new(writer: W, byte_order: ByteOrder) -> Self {
        Self {
            writer,
            byte_order,
            cache: 0,
            bits_in_cache: 0,
            bytes_written: 0,
        }
    }

    /// Get the configured byte order.
    pub fn byte_order(&self) -> ByteOrder {
        self.byte_order
    }

    /// Get a reference to the underlying writer.
    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Consume this `BitWriter` and return the underlying writer.
    ///
    /// Cached bits are not flushed.
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Total bytes emitted to the sink so far.
    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }

    /// Number of bits currently held in the cache.
    pub fn bits_in_cache(&self) -> u8 {
        self.bits_in_cache
    }

    fn emit_byte(&mut self, byte: u8) -> Result<()> {
        self.writer.write_all(&[byte])?;
        self.bytes_written += 1;
        Ok(())
    }

    /// Write the low `count` bits of `value` (1-16 bits).
    pub fn write_bits(&mut self, value: u16, count: u8) -> Result<()> {
        check_bit_count(count)?;

        let value = u32::from(value) & low_mask(count);
        match self.byte_order {
            ByteOrder::MsbFirst => self.cache = (self.cache << count) | value,
            ByteOrder::LsbFirst => self.cache |= value << self.bits_in_cache,
        }
        self.bits_in_cache += count;

        while self.bits_in_cache >= 8 {
            let byte = match self.byte_order {
                ByteOrder::MsbFirst => (self.cache >> (self.bits_in_cache - 8)) as u8,
                ByteOrder::LsbFirst => {
                    let byte = self.cache as u8;
                    self.cache >>= 8;
                    byte
                }
            };
            self.bits_in_cache -= 8;
            self.cache &= low_mask(self.bits_in_cache);
            self.emit_byte(byte)?;
        }

        Ok(())
    }

    /// Emit any partial final byte, zero-padded, and flush the sink.
    pub fn flush(&mut self) -> Result<()> {
        if self.bits_in_cache > 0 {
            let mut byte = self.cache & low_mask(self.bits_in_cache);
            if self.byte_order == ByteOrder::MsbFirst {
                byte <<= 8 - self.bits_in_cache;
            }
            self.cache = 0;
            self.bits_in_cache = 0;
            self.emit_byte(byte as u8)?;
        }

        self.writer.flush()?;
        Ok(())
    }
}
