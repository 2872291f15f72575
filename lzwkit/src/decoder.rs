//! LZW decoder (decompression).
//!
//! Decoding stops at whichever comes first: the EOI code, or the caller's
//! expected output size. In TIFF mode a stream that simply runs out of bytes
//! is treated as if it had ended with EOI.

use crate::config::LzwConfig;
use crate::dictionary::DecodeTable;
use crate::error::{LzwError, Result};
use crate::observer::{CodeObserver, NoopObserver};
use lzwkit_core::{BitReader, ReadOutcome};
use log::{debug, trace};
use std::io::Read;

/// Upper bound on the output buffer reserved up front.
const MAX_PREALLOC: usize = 1 << 24;

/// LZW decoder for decompression.
#[derive(Debug)]
pub struct LzwDecoder<O: CodeObserver = NoopObserver> {
    /// Configuration.
    config: LzwConfig,
    /// Table for code lookup.
    table: DecodeTable,
    /// Notified of every code read.
    observer: O,
}

impl LzwDecoder {
    /// Create a new LZW decoder with the given configuration.
    pub fn new(config: LzwConfig) -> Result<Self> {
        Self::with_observer(config, NoopObserver)
    }
}

impl<O: CodeObserver> LzwDecoder<O> {
    /// Create a decoder that reports to `observer`.
    pub fn with_observer(config: LzwConfig, mut observer: O) -> Result<Self> {
        config.validate()?;
        observer.init(config.clear_code(), config.eoi_code());
        Ok(Self {
            config,
            table: DecodeTable::new(config),
            observer,
        })
    }

    /// Get the configuration.
    pub fn config(&self) -> &LzwConfig {
        &self.config
    }

    /// Get a reference to the observer.
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Consume the decoder and return its observer.
    pub fn into_observer(self) -> O {
        self.observer
    }

    /// Decode LZW-compressed data.
    ///
    /// # Parameters
    ///
    /// - `input`: LZW-compressed data
    /// - `expected_size`: Expected size of decompressed output
    ///
    /// # Returns
    ///
    /// At most `expected_size` bytes; fewer if EOI is reached first.
    pub fn decode(&mut self, input: &[u8], expected_size: usize) -> Result<Vec<u8>> {
        self.decode_from(input, expected_size)
    }

    /// Decode from any reader.
    ///
    /// Bytes are pulled from `source` one at a time, so nothing past the
    /// last code needed is consumed.
    pub fn decode_from<R: Read>(&mut self, source: R, expected_size: usize) -> Result<Vec<u8>> {
        let clear_code = self.config.clear_code();
        let eoi_code = self.config.eoi_code();

        let mut reader = BitReader::new(source, self.config.byte_order);
        if self.config.tiff_mode {
            reader = reader.with_eoi_sentinel(eoi_code);
        }

        let mut output = Vec::with_capacity(expected_size.min(MAX_PREALLOC));
        self.table.reset();

        // Previous code; `None` right after a clear code.
        let mut old_code: Option<u16> = None;
        let mut seen_clear = false;

        loop {
            let code = self.read_code(&mut reader)?;

            if code == eoi_code {
                break;
            }

            if code == clear_code {
                self.table.reset();
                old_code = None;
                seen_clear = true;
                if output.len() >= expected_size {
                    break;
                }
                continue;
            }

            if !seen_clear {
                return Err(LzwError::MissingClearCode { code });
            }

            match old_code {
                // First code after a clear: a plain lookup, no new entry.
                None => {
                    let string = self.lookup(code)?;
                    output.extend_from_slice(string);
                }
                Some(old) => {
                    let entry = if usize::from(code) < self.table.codes() {
                        let current = self.lookup(code)?;
                        output.extend_from_slice(current);
                        let first = current[0];
                        let mut entry = self.lookup(old)?.to_vec();
                        entry.push(first);
                        entry
                    } else if usize::from(code) == self.table.codes() {
                        // Code for the entry about to be created: prev + prev[0]
                        let prev = self.lookup(old)?;
                        let mut entry = prev.to_vec();
                        entry.push(prev[0]);
                        output.extend_from_slice(&entry);
                        entry
                    } else {
                        return Err(self.corrupt(code));
                    };
                    self.add_entry(entry)?;
                }
            }

            old_code = Some(code);
            if output.len() >= expected_size {
                break;
            }
        }

        // The last string may run past the expected size.
        output.truncate(expected_size);

        debug!(
            "LZW decoded {} bytes from {} bytes",
            output.len(),
            reader.bytes_read()
        );
        self.observer.finished(reader.bytes_read());
        Ok(output)
    }

    fn read_code<R: Read>(&mut self, reader: &mut BitReader<R>) -> Result<u16> {
        let width = self.table.code_width();
        let code = match reader.read_bits(width)? {
            ReadOutcome::Code(code) => code,
            ReadOutcome::EndOfInput(code) => {
                debug!(
                    "input exhausted after {} bytes, assuming EOI",
                    reader.bytes_read()
                );
                code
            }
        };
        trace!("read code {} at {} bits", code, width);
        self.observer.data_code(code);
        Ok(code)
    }

    /// Look up a non-empty table entry.
    fn lookup(&self, code: u16) -> Result<&[u8]> {
        match self.table.get(code) {
            Some(string) if !string.is_empty() => Ok(string),
            _ => Err(self.corrupt(code)),
        }
    }

    fn corrupt(&self, code: u16) -> LzwError {
        LzwError::CorruptStreamCode {
            code,
            table_size: self.table.codes(),
        }
    }

    fn add_entry(&mut self, entry: Vec<u8>) -> Result<()> {
        let code = self.table.codes() as u16;
        self.observer.entry_added(code, &entry);
        if self.table.push(entry)? {
            debug!("code width grew to {}", self.table.code_width());
            self.observer.code_width_grew(self.table.code_width());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::LzwEncoder;
    use lzwkit_core::{BitWriter, ByteOrder};

    fn pack(codes: &[(u16, u8)], order: ByteOrder) -> Vec<u8> {
        let mut output = Vec::new();
        let mut writer = BitWriter::new(&mut output, order);
        for &(code, width) in codes {
            writer.write_bits(code, width).unwrap();
        }
        writer.flush().unwrap();
        output
    }

    #[test]
    fn test_decode_hand_packed_stream() {
        // clear, T, O, B, E, <TO>, eoi
        let data = pack(
            &[(256, 9), (84, 9), (79, 9), (66, 9), (69, 9), (258, 9), (257, 9)],
            ByteOrder::LsbFirst,
        );
        let mut decoder = LzwDecoder::new(LzwConfig::GIF).unwrap();
        assert_eq!(decoder.decode(&data, 100).unwrap(), b"TOBETO");
    }

    #[test]
    fn test_decode_next_code_case() {
        // clear, A, <AA> (not yet in the table), eoi
        let data = pack(&[(256, 9), (65, 9), (258, 9), (257, 9)], ByteOrder::MsbFirst);
        let mut decoder = LzwDecoder::new(LzwConfig::new(8, ByteOrder::MsbFirst)).unwrap();
        assert_eq!(decoder.decode(&data, 100).unwrap(), b"AAA");
    }

    #[test]
    fn test_decode_code_past_next_is_corrupt() {
        // After "A", the next code to be created is 258; 259 is invalid.
        let data = pack(&[(256, 9), (65, 9), (259, 9), (257, 9)], ByteOrder::MsbFirst);
        let mut decoder = LzwDecoder::new(LzwConfig::new(8, ByteOrder::MsbFirst)).unwrap();
        match decoder.decode(&data, 100) {
            Err(LzwError::CorruptStreamCode { code, table_size }) => {
                assert_eq!(code, 259);
                assert_eq!(table_size, 258);
            }
            other => panic!("expected corrupt stream error, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_unknown_code_after_clear() {
        let data = pack(&[(256, 9), (300, 9), (257, 9)], ByteOrder::MsbFirst);
        let mut decoder = LzwDecoder::new(LzwConfig::new(8, ByteOrder::MsbFirst)).unwrap();
        assert!(matches!(
            decoder.decode(&data, 100),
            Err(LzwError::CorruptStreamCode { code: 300, .. })
        ));
    }

    #[test]
    fn test_decode_missing_clear_code() {
        let data = pack(&[(65, 9), (257, 9)], ByteOrder::MsbFirst);
        let mut decoder = LzwDecoder::new(LzwConfig::new(8, ByteOrder::MsbFirst)).unwrap();
        assert!(matches!(
            decoder.decode(&data, 100),
            Err(LzwError::MissingClearCode { code: 65 })
        ));
    }

    #[test]
    fn test_decode_clear_then_eoi() {
        let data = pack(&[(256, 9), (257, 9)], ByteOrder::MsbFirst);
        let mut decoder = LzwDecoder::new(LzwConfig::new(8, ByteOrder::MsbFirst)).unwrap();
        assert!(decoder.decode(&data, 10).unwrap().is_empty());
    }

    #[test]
    fn test_decode_repeated_clear_codes() {
        let data = pack(
            &[(256, 9), (256, 9), (72, 9), (256, 9), (73, 9), (257, 9)],
            ByteOrder::LsbFirst,
        );
        let mut decoder = LzwDecoder::new(LzwConfig::GIF).unwrap();
        assert_eq!(decoder.decode(&data, 10).unwrap(), b"HI");
    }

    #[test]
    fn test_decode_stops_at_expected_size() {
        // No EOI at all; the size budget ends decoding.
        let data = pack(&[(256, 9), (65, 9), (66, 9)], ByteOrder::MsbFirst);
        let mut decoder = LzwDecoder::new(LzwConfig::new(8, ByteOrder::MsbFirst)).unwrap();
        assert_eq!(decoder.decode(&data, 2).unwrap(), b"AB");
    }

    #[test]
    fn test_decode_truncates_overshoot() {
        let data = pack(&[(256, 9), (65, 9), (258, 9), (257, 9)], ByteOrder::MsbFirst);
        let mut decoder = LzwDecoder::new(LzwConfig::new(8, ByteOrder::MsbFirst)).unwrap();
        assert_eq!(decoder.decode(&data, 2).unwrap(), b"AA");
    }

    #[test]
    fn test_decode_truncated_without_tiff_mode() {
        let data = pack(&[(256, 9), (65, 9), (66, 9)], ByteOrder::MsbFirst);
        let mut decoder = LzwDecoder::new(LzwConfig::new(8, ByteOrder::MsbFirst)).unwrap();
        assert!(matches!(
            decoder.decode(&data, 10),
            Err(LzwError::PrematureEndOfData { .. })
        ));
    }

    #[test]
    fn test_decode_truncated_in_tiff_mode() {
        let data = pack(&[(256, 9), (65, 9), (66, 9)], ByteOrder::MsbFirst);
        let mut decoder = LzwDecoder::new(LzwConfig::TIFF).unwrap();
        assert_eq!(decoder.decode(&data, 10).unwrap(), b"AB");
    }

    #[test]
    fn test_decode_310_bytes() {
        let config = LzwConfig::TIFF;
        let original = b"This is a test of compression! ".repeat(10);
        assert_eq!(original.len(), 310);

        let mut encoder = LzwEncoder::new(config).unwrap();
        let compressed = encoder.encode(&original).unwrap();

        let mut decoder = LzwDecoder::new(config).unwrap();
        let decompressed = decoder.decode(&compressed, original.len()).unwrap();
        assert_eq!(decompressed.len(), 310);
        assert_eq!(decompressed, original);
    }

    #[test]
    fn test_decoder_is_reusable() {
        let config = LzwConfig::GIF;
        let compressed = LzwEncoder::new(config).unwrap().encode(b"ABABABAB").unwrap();

        let mut decoder = LzwDecoder::new(config).unwrap();
        assert_eq!(decoder.decode(&compressed, 8).unwrap(), b"ABABABAB");
        assert_eq!(decoder.decode(&compressed, 8).unwrap(), b"ABABABAB");
    }
}
