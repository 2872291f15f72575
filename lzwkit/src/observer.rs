//! Side-channel notifications for codes written and read.
//!
//! Observers never influence coding; they exist for diagnostics, tests and
//! the `lzw inspect` command.

/// Receives notifications from an [`LzwEncoder`](crate::LzwEncoder) or
/// [`LzwDecoder`](crate::LzwDecoder).
///
/// Every method has a no-op default, so implementors only override what
/// they need.
pub trait CodeObserver {
    /// Called once at construction with the reserved code values.
    fn init(&mut self, _clear_code: u16, _eoi_code: u16) {}

    /// Called for the clear code and every data code the encoder writes, and
    /// for every code (EOI included) the decoder reads.
    fn data_code(&mut self, _code: u16) {}

    /// Called when the encoder writes the end-of-information code.
    fn eoi_code(&mut self, _code: u16) {}

    /// Called for each new dictionary entry.
    fn entry_added(&mut self, _code: u16, _entry: &[u8]) {}

    /// Called when the code width grows within a clear epoch.
    fn code_width_grew(&mut self, _width: u8) {}

    /// Called at the end of a run with the number of bytes written
    /// (encoder) or consumed (decoder).
    fn finished(&mut self, _byte_count: u64) {}
}

/// Observer that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl CodeObserver for NoopObserver {}

impl<O: CodeObserver + ?Sized> CodeObserver for &mut O {
    fn init(&mut self, clear_code: u16, eoi_code: u16) {
        (**self).init(clear_code, eoi_code);
    }

    fn data_code(&mut self, code: u16) {
        (**self).data_code(code);
    }

    fn eoi_code(&mut self, code: u16) {
        (**self).eoi_code(code);
    }

    fn entry_added(&mut self, code: u16, entry: &[u8]) {
        (**self).entry_added(code, entry);
    }

    fn code_width_grew(&mut self, width: u8) {
        (**self).code_width_grew(width);
    }

    fn finished(&mut self, byte_count: u64) {
        (**self).finished(byte_count);
    }
}

/// Observer that keeps a full log of what it was told.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeRecorder {
    /// Clear and EOI codes reported at construction.
    pub reserved: Option<(u16, u16)>,
    /// Codes in the order they were reported through `data_code`.
    pub codes: Vec<u16>,
    /// EOI codes reported through `eoi_code`.
    pub eoi_codes: Vec<u16>,
    /// Dictionary entries in insertion order.
    pub entries: Vec<(u16, Vec<u8>)>,
    /// `(codes seen so far, new width)` for every width increase.
    pub width_changes: Vec<(usize, u8)>,
    /// Byte count reported at the end of the last run.
    pub byte_count: Option<u64>,
}

impl CodeRecorder {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }
}

impl CodeObserver for CodeRecorder {
    fn init(&mut self, clear_code: u16, eoi_code: u16) {
        self.reserved = Some((clear_code, eoi_code));
    }

    fn data_code(&mut self, code: u16) {
        self.codes.push(code);
    }

    fn eoi_code(&mut self, code: u16) {
        self.eoi_codes.push(code);
    }

    fn entry_added(&mut self, code: u16, entry: &[u8]) {
        self.entries.push((code, entry.to_vec()));
    }

    fn code_width_grew(&mut self, width: u8) {
        self.width_changes.push((self.codes.len(), width));
    }

    fn finished(&mut self, byte_count: u64) {
        self.byte_count = Some(byte_count);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notify<O: CodeObserver>(mut observer: O) {
        observer.init(256, 257);
        observer.data_code(65);
        observer.entry_added(258, b"AB");
        observer.code_width_grew(10);
        observer.eoi_code(257);
        observer.finished(4);
    }

    #[test]
    fn test_recorder_through_mut_ref() {
        let mut recorder = CodeRecorder::new();
        notify(&mut recorder);

        assert_eq!(recorder.reserved, Some((256, 257)));
        assert_eq!(recorder.codes, vec![65]);
        assert_eq!(recorder.entries, vec![(258, b"AB".to_vec())]);
        assert_eq!(recorder.width_changes, vec![(1, 10)]);
        assert_eq!(recorder.eoi_codes, vec![257]);
        assert_eq!(recorder.byte_count, Some(4));
    }

    #[test]
    fn test_noop_observer() {
        notify(NoopObserver);
    }
}
