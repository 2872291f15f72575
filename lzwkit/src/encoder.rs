//! LZW encoder (compression).

use crate::config::LzwConfig;
use crate::dictionary::{EncodeDictionary, EntryOutcome};
use crate::error::{LzwError, Result};
use crate::observer::{CodeObserver, NoopObserver};
use lzwkit_core::BitWriter;
use log::{debug, trace};
use std::io::Write;

/// LZW encoder for compression.
///
/// One encoder owns one dictionary; every call to [`encode`](Self::encode)
/// starts from a freshly reset dictionary, so an encoder may be reused.
#[derive(Debug)]
pub struct LzwEncoder<O: CodeObserver = NoopObserver> {
    /// Configuration.
    config: LzwConfig,
    /// Dictionary for string lookup.
    dict: EncodeDictionary,
    /// Notified of every code written.
    observer: O,
}

impl LzwEncoder {
    /// Create a new LZW encoder with the given configuration.
    pub fn new(config: LzwConfig) -> Result<Self> {
        Self::with_observer(config, NoopObserver)
    }
}

impl<O: CodeObserver> LzwEncoder<O> {
    /// Create an encoder that reports to `observer`.
    pub fn with_observer(config: LzwConfig, mut observer: O) -> Result<Self> {
        config.validate()?;
        observer.init(config.clear_code(), config.eoi_code());
        Ok(Self {
            config,
            dict: EncodeDictionary::new(config),
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

    /// Consume the encoder and return its observer.
    pub fn into_observer(self) -> O {
        self.observer
    }

    /// Encode data with LZW compression.
    ///
    /// # Algorithm
    ///
    /// 1. Reset the dictionary and write a clear code
    /// 2. Extend the current run while `run + next byte` is in the dictionary
    /// 3. Otherwise output the run's code, add `run + next byte`, and restart
    ///    the run at the next byte
    /// 4. Output the final run and the EOI code, then flush
    ///
    /// Empty input produces just the clear and EOI codes.
    pub fn encode(&mut self, input: &[u8]) -> Result<Vec<u8>> {
        let mut output = Vec::with_capacity(input.len() / 2 + 4);
        self.encode_to(input, &mut output)?;
        Ok(output)
    }

    /// Encode into any writer, returning the number of bytes written.
    pub fn encode_to<W: Write>(&mut self, input: &[u8], sink: W) -> Result<u64> {
        let clear_code = self.config.clear_code();
        if let Some(&byte) = input.iter().find(|&&b| u16::from(b) >= clear_code) {
            return Err(LzwError::LiteralOutOfRange { byte, clear_code });
        }

        let mut writer = BitWriter::new(sink, self.config.byte_order);

        self.dict.reset();
        self.write_data_code(&mut writer, clear_code)?;

        if !input.is_empty() {
            // The run is always input[run_start..i]; a single byte is always
            // a known literal, so the first run starts at length one.
            let mut run_start = 0;
            for i in 1..input.len() {
                let candidate = &input[run_start..=i];
                if self.dict.contains(candidate) {
                    continue;
                }

                let code = self.code_for(&input[run_start..i])?;
                self.write_data_code(&mut writer, code)?;
                self.add_table_entry(&mut writer, candidate)?;
                run_start = i;
            }

            let code = self.code_for(&input[run_start..])?;
            self.write_data_code(&mut writer, code)?;

            if self.dict.grow_for_trailing_entry() {
                debug!("code width grew to {} before EOI", self.dict.code_width());
                self.observer.code_width_grew(self.dict.code_width());
            }
        }

        let eoi_code = self.config.eoi_code();
        self.observer.eoi_code(eoi_code);
        writer.write_bits(eoi_code, self.dict.code_width())?;
        writer.flush()?;

        let written = writer.bytes_written();
        debug!(
            "LZW encoded {} bytes into {} bytes ({} codes assigned)",
            input.len(),
            written,
            self.dict.next_code()
        );
        self.observer.finished(written);
        Ok(written)
    }

    fn code_for(&self, run: &[u8]) -> Result<u16> {
        self.dict
            .find_code(run)
            .ok_or(LzwError::DictionaryLookupFailure { run_len: run.len() })
    }

    fn write_data_code<W: Write>(&mut self, writer: &mut BitWriter<W>, code: u16) -> Result<()> {
        trace!("write code {} at {} bits", code, self.dict.code_width());
        self.observer.data_code(code);
        writer.write_bits(code, self.dict.code_width())?;
        Ok(())
    }

    /// Add `string` to the dictionary, growing the width or clearing the
    /// table as the limit dictates.
    fn add_table_entry<W: Write>(&mut self, writer: &mut BitWriter<W>, string: &[u8]) -> Result<()> {
        match self.dict.add_entry(string) {
            EntryOutcome::Added { code, grew } => {
                if grew {
                    debug!("code width grew to {} at code {}", self.dict.code_width(), code);
                    self.observer.code_width_grew(self.dict.code_width());
                }
                self.observer.entry_added(code, string);
            }
            EntryOutcome::Full => {
                debug!("code table full, emitting clear code");
                self.write_data_code(writer, self.config.clear_code())?;
                self.dict.reset();
            }
        }
        Ok(())
    }
}
