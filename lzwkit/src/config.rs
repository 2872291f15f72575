//! LZW configuration for different formats (TIFF, GIF).

use crate::error::{LzwError, Result};
use lzwkit_core::ByteOrder;

/// Widest code the codec ever reads or writes.
pub const MAX_CODE_WIDTH: u8 = 12;

/// Number of table slots addressable by a 12-bit code.
pub const MAX_ENTRIES: usize = 1 << MAX_CODE_WIDTH;

/// LZW coding parameters, shared by the encoder and decoder of one stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LzwConfig {
    /// Bit width of literal codes before any growth (2-8).
    ///
    /// Codes start one bit wider than this, since the leading clear code
    /// already bumps the width once.
    pub initial_code_width: u8,
    /// Bit packing order.
    pub byte_order: ByteOrder,
    /// Encoder grows the code width one entry early (TIFF convention).
    pub early_limit: bool,
    /// Decoder uses the TIFF growth threshold and treats a truncated stream
    /// as ending in EOI.
    pub tiff_mode: bool,
}

impl LzwConfig {
    /// Standard TIFF LZW configuration.
    ///
    /// - MSB-first bit order
    /// - 9-12 bit codes
    /// - Early code change
    /// - Missing EOI tolerated
    pub const TIFF: Self = Self {
        initial_code_width: 8,
        byte_order: ByteOrder::MsbFirst,
        early_limit: true,
        tiff_mode: true,
    };

    /// Standard GIF LZW configuration for 8-bit palettes.
    ///
    /// - LSB-first bit order
    /// - 9-12 bit codes
    /// - Standard code change
    pub const GIF: Self = Self {
        initial_code_width: 8,
        byte_order: ByteOrder::LsbFirst,
        early_limit: false,
        tiff_mode: false,
    };

    /// Create a plain configuration: no early limit, no TIFF quirks.
    pub const fn new(initial_code_width: u8, byte_order: ByteOrder) -> Self {
        Self {
            initial_code_width,
            byte_order,
            early_limit: false,
            tiff_mode: false,
        }
    }

    /// Set the bit packing order.
    pub const fn with_byte_order(mut self, byte_order: ByteOrder) -> Self {
        self.byte_order = byte_order;
        self
    }

    /// Set the encoder's early-limit flag.
    pub const fn with_early_limit(mut self, early_limit: bool) -> Self {
        self.early_limit = early_limit;
        self
    }

    /// Set the decoder's TIFF mode flag.
    pub const fn with_tiff_mode(mut self, tiff_mode: bool) -> Self {
        self.tiff_mode = tiff_mode;
        self
    }

    /// Check that the parameters describe a codable stream.
    pub fn validate(&self) -> Result<()> {
        if !(2..=8).contains(&self.initial_code_width) {
            return Err(LzwError::InvalidCodeWidth(self.initial_code_width));
        }
        Ok(())
    }

    /// Get the clear code value (256 for 8-bit literals).
    pub fn clear_code(&self) -> u16 {
        1 << self.initial_code_width
    }

    /// Get the end-of-information code value (clear_code + 1).
    pub fn eoi_code(&self) -> u16 {
        self.clear_code() + 1
    }

    /// Get the first available code for dictionary entries.
    pub fn first_code(&self) -> u16 {
        self.eoi_code() + 1
    }

    /// Width of the first code in a clear epoch.
    pub fn start_width(&self) -> u8 {
        self.initial_code_width + 1
    }
}

impl Default for LzwConfig {
    fn default() -> Self {
        Self::GIF
    }
}

/// Cursor value at which a table of `code_width`-bit codes counts as full.
///
/// Both off-by-one conventions go through here: the encoder passes its
/// `early_limit` flag, the decoder its `tiff_mode` flag.
pub(crate) fn growth_limit(code_width: u8, one_early: bool) -> u16 {
    let limit = 1u16 << code_width;
    if one_early { limit - 1 } else { limit }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tiff_config() {
        let config = LzwConfig::TIFF;
        assert_eq!(config.initial_code_width, 8);
        assert_eq!(config.byte_order, ByteOrder::MsbFirst);
        assert_eq!(config.clear_code(), 256);
        assert_eq!(config.eoi_code(), lzwkit_core::TIFF_EOI_CODE);
        assert_eq!(config.first_code(), 258);
        assert_eq!(config.start_width(), 9);
        assert!(config.early_limit);
        assert!(config.tiff_mode);
    }

    #[test]
    fn test_gif_config() {
        let config = LzwConfig::GIF;
        assert_eq!(config.byte_order, ByteOrder::LsbFirst);
        assert_eq!(config.clear_code(), 256);
        assert_eq!(config.eoi_code(), 257);
        assert!(!config.early_limit);
        assert!(!config.tiff_mode);
    }

    #[test]
    fn test_small_alphabet() {
        let config = LzwConfig::new(2, ByteOrder::LsbFirst);
        assert_eq!(config.clear_code(), 4);
        assert_eq!(config.eoi_code(), 5);
        assert_eq!(config.first_code(), 6);
        assert_eq!(config.start_width(), 3);
    }

    #[test]
    fn test_builder() {
        let config = LzwConfig::new(8, ByteOrder::LsbFirst)
            .with_byte_order(ByteOrder::MsbFirst)
            .with_early_limit(true)
            .with_tiff_mode(true);
        assert_eq!(config, LzwConfig::TIFF);
    }

    #[test]
    fn test_validate() {
        assert!(LzwConfig::TIFF.validate().is_ok());
        assert!(LzwConfig::new(2, ByteOrder::MsbFirst).validate().is_ok());
        assert!(matches!(
            LzwConfig::new(1, ByteOrder::MsbFirst).validate(),
            Err(LzwError::InvalidCodeWidth(1))
        ));
        assert!(matches!(
            LzwConfig::new(9, ByteOrder::MsbFirst).validate(),
            Err(LzwError::InvalidCodeWidth(9))
        ));
    }

    #[test]
    fn test_growth_limit() {
        assert_eq!(growth_limit(9, false), 512);
        assert_eq!(growth_limit(9, true), 511);
        assert_eq!(growth_limit(12, false), 4096);
        assert_eq!(growth_limit(12, true), 4095);
    }
}
