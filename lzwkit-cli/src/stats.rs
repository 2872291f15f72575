//! Code statistics gathered while a stream is decoded.

use lzwkit::CodeObserver;
use serde::Serialize;

/// Summary of one decoded stream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StreamStats {
    /// Clear code of the stream.
    pub clear_code: u16,
    /// End-of-information code of the stream.
    pub eoi_code: u16,
    /// Every code read, including clear and EOI.
    pub codes: u64,
    /// Clear codes read.
    pub clear_codes: u64,
    /// Whether an explicit EOI code was read.
    pub saw_eoi: bool,
    /// Table entries created over all clear epochs.
    pub entries_added: u64,
    /// Longest string held by any table entry.
    pub longest_entry: usize,
    /// Widest code read.
    pub max_code_width: u8,
    /// Compressed bytes consumed.
    pub bytes_read: u64,
    /// Decompressed bytes produced.
    pub bytes_written: u64,
}

/// Observer that fills in [`StreamStats`].
#[derive(Debug, Default)]
pub struct StatsObserver {
    stats: StreamStats,
}

impl StatsObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Finish with the decoded size and return the summary.
    pub fn into_stats(mut self, bytes_written: usize) -> StreamStats {
        self.stats.bytes_written = bytes_written as u64;
        self.stats
    }
}

impl CodeObserver for StatsObserver {
    fn init(&mut self, clear_code: u16, eoi_code: u16) {
        self.stats.clear_code = clear_code;
        self.stats.eoi_code = eoi_code;
        self.stats.max_code_width = clear_code.trailing_zeros() as u8 + 1;
    }

    fn data_code(&mut self, code: u16) {
        self.stats.codes += 1;
        if code == self.stats.clear_code {
            self.stats.clear_codes += 1;
        } else if code == self.stats.eoi_code {
            self.stats.saw_eoi = true;
        }
    }

    fn entry_added(&mut self, _code: u16, entry: &[u8]) {
        self.stats.entries_added += 1;
        self.stats.longest_entry = self.stats.longest_entry.max(entry.len());
    }

    fn code_width_grew(&mut self, width: u8) {
        self.stats.max_code_width = self.stats.max_code_width.max(width);
    }

    fn finished(&mut self, byte_count: u64) {
        self.stats.bytes_read = byte_count;
    }
}
