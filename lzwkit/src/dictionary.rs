//! LZW dictionary (code table) management.
//!
//! The encoder and decoder keep separate structures: the encoder needs
//! string -> code lookups, the decoder code -> string. Both are rebuilt from
//! scratch on every clear code and share [`growth_limit`] so the two
//! off-by-one conventions cannot drift apart.

use crate::config::{LzwConfig, MAX_CODE_WIDTH, MAX_ENTRIES, growth_limit};
use crate::error::{LzwError, Result};
use std::collections::HashMap;

/// Result of offering a new string to the encoder dictionary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EntryOutcome {
    /// The string was assigned `code`; `grew` is set when the code width
    /// was bumped first.
    Added { code: u16, grew: bool },
    /// The table is full at the maximum width; the caller must emit a clear
    /// code and reset. The string was dropped.
    Full,
}

/// String -> code dictionary used by the encoder.
#[derive(Debug)]
pub(crate) struct EncodeDictionary {
    /// Reverse lookup: byte sequence -> code.
    map: HashMap<Vec<u8>, u16>,
    /// Configuration.
    config: LzwConfig,
    /// Next available code.
    next_code: u16,
    /// Current code bit width.
    code_width: u8,
}

impl EncodeDictionary {
    /// Create a dictionary holding only the literal codes.
    pub fn new(config: LzwConfig) -> Self {
        let mut dict = Self {
            map: HashMap::with_capacity(MAX_ENTRIES),
            config,
            next_code: 0,
            code_width: config.initial_code_width,
        };
        dict.reset();
        dict
    }

    /// Reset the dictionary to its initial state.
    pub fn reset(&mut self) {
        self.map.clear();

        let clear_code = self.config.clear_code();
        let eoi_code = self.config.eoi_code();
        for code in 0..self.config.first_code() {
            if code == clear_code || code == eoi_code {
                continue;
            }
            self.map.insert(vec![code as u8], code);
        }

        self.next_code = self.config.first_code();
        self.code_width = self.config.start_width();
    }

    /// Find the code for a byte sequence.
    pub fn find_code(&self, string: &[u8]) -> Option<u16> {
        self.map.get(string).copied()
    }

    /// Check whether a byte sequence has a code.
    pub fn contains(&self, string: &[u8]) -> bool {
        self.map.contains_key(string)
    }

    /// Offer `string` as a new entry.
    ///
    /// When the cursor sits on the growth limit the width grows first, or,
    /// at the maximum width, the string is refused with [`EntryOutcome::Full`].
    pub fn add_entry(&mut self, string: &[u8]) -> EntryOutcome {
        let mut grew = false;
        if self.next_code == growth_limit(self.code_width, self.config.early_limit) {
            if self.code_width < MAX_CODE_WIDTH {
                self.code_width += 1;
                grew = true;
            } else {
                return EntryOutcome::Full;
            }
        }

        let code = self.next_code;
        self.map.insert(string.to_vec(), code);
        self.next_code += 1;
        EntryOutcome::Added { code, grew }
    }

    /// Apply the growth check without inserting anything.
    ///
    /// Used after the last run code: the decoder adds an entry when it reads
    /// that code, so it may already expect EOI one bit wider.
    pub fn grow_for_trailing_entry(&mut self) -> bool {
        if self.next_code == growth_limit(self.code_width, self.config.early_limit)
            && self.code_width < MAX_CODE_WIDTH
        {
            self.code_width += 1;
            return true;
        }
        false
    }

    /// Get the current bit width.
    pub fn code_width(&self) -> u8 {
        self.code_width
    }

    /// Get the next code that will be assigned.
    pub fn next_code(&self) -> u16 {
        self.next_code
    }
}

/// Code -> string table used by the decoder.
///
/// The table's length is the next code to assign; the clear and EOI slots
/// hold empty placeholders.
#[derive(Debug)]
pub(crate) struct DecodeTable {
    /// Code table: code -> byte sequence.
    entries: Vec<Vec<u8>>,
    /// Configuration.
    config: LzwConfig,
    /// Current code bit width.
    code_width: u8,
}

impl DecodeTable {
    /// Create a table holding only the literal codes.
    pub fn new(config: LzwConfig) -> Self {
        let mut table = Self {
            entries: Vec::with_capacity(MAX_ENTRIES),
            config,
            code_width: config.initial_code_width,
        };
        table.reset();
        table
    }

    /// Reset the table to its initial state.
    pub fn reset(&mut self) {
        self.entries.clear();
        for code in 0..self.config.clear_code() {
            self.entries.push(vec![code as u8]);
        }

        // Placeholders for clear code and EOI code
        self.entries.push(Vec::new());
        self.entries.push(Vec::new());

        self.code_width = self.config.start_width();
    }

    /// Number of assigned codes, i.e. the next code to assign.
    pub fn codes(&self) -> usize {
        self.entries.len()
    }

    /// Get the byte sequence for an assigned code.
    pub fn get(&self, code: u16) -> Option<&[u8]> {
        self.entries.get(usize::from(code)).map(Vec::as_slice)
    }

    /// Append a new entry, growing the code width when the threshold is hit.
    ///
    /// Returns whether the width grew.
    pub fn push(&mut self, entry: Vec<u8>) -> Result<bool> {
        if self.entries.len() >= MAX_ENTRIES {
            return Err(LzwError::TableOverflow {
                max_entries: MAX_ENTRIES,
            });
        }
        self.entries.push(entry);

        let limit = growth_limit(self.code_width, self.config.tiff_mode);
        if self.entries.len() == usize::from(limit) && self.code_width < MAX_CODE_WIDTH {
            self.code_width += 1;
            return Ok(true);
        }
        Ok(false)
    }

    /// Get the current bit width.
    pub fn code_width(&self) -> u8 {
        self.code_width
    }
}
