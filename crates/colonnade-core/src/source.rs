//! Source text and the translation from bytes to reporting coordinates.

use crate::span::{ByteRange, ReportRange};

/// Read-only access to the text of one source file.
///
/// Matching and neighbour scans work on bytes; reports are expressed in
/// whatever unit the implementation chooses.
pub trait SourceText {
    /// Returns the full text.
    fn text(&self) -> &str;

    /// Translates a byte range into the reporting coordinate system.
    ///
    /// Returns `None` when the range is out of bounds or does not fall on
    /// character boundaries.
    fn byte_range_to_report_range(&self, range: ByteRange) -> Option<ReportRange>;

    /// Returns the text covered by a byte range, if it is well formed.
    fn substring(&self, range: ByteRange) -> Option<&str> {
        self.text().get(range.as_std())
    }
}

/// Source text reported in UTF-16 code units.
///
/// # Example
///
/// ```
/// use colonnade_core::{ByteRange, ReportRange, SourceFile, SourceText};
///
/// // `é` is two bytes in UTF-8 and one UTF-16 unit.
/// let file = SourceFile::new("é:Int");
/// assert_eq!(
///     file.byte_range_to_report_range(ByteRange::new(2, 4)),
///     Some(ReportRange::new(1, 4))
/// );
/// assert_eq!(file.byte_range_to_report_range(ByteRange::new(1, 1)), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceFile<'a> {
    text: &'a str,
}

impl<'a> SourceFile<'a> {
    /// Wraps borrowed text.
    #[must_use]
    pub const fn new(text: &'a str) -> Self {
        Self { text }
    }

    /// Returns the wrapped text with its original lifetime.
    #[must_use]
    pub const fn as_str(&self) -> &'a str {
        self.text
    }
}

impl SourceText for SourceFile<'_> {
    fn text(&self) -> &str {
        self.text
    }

    fn byte_range_to_report_range(&self, range: ByteRange) -> Option<ReportRange> {
        let prefix = self.text.get(..range.offset())?;
        let covered = self.text.get(range.as_std())?;
        Some(ReportRange::new(utf16_len(prefix), utf16_len(covered)))
    }
}

impl SourceText for str {
    fn text(&self) -> &str {
        self
    }

    fn byte_range_to_report_range(&self, range: ByteRange) -> Option<ReportRange> {
        SourceFile::new(self).byte_range_to_report_range(range)
    }
}

impl SourceText for String {
    fn text(&self) -> &str {
        self
    }

    fn byte_range_to_report_range(&self, range: ByteRange) -> Option<ReportRange> {
        SourceFile::new(self).byte_range_to_report_range(range)
    }
}

fn utf16_len(text: &str) -> usize {
    text.chars().map(char::len_utf16).sum()
}
