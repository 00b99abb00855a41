//! Byte ranges in source text and ranges in reporting coordinates.

use serde::{Deserialize, Serialize};

/// A half-open range of bytes in the source text.
///
/// # Example
///
/// ```
/// use colonnade_core::ByteRange;
///
/// let range = ByteRange::new(4, 3);
/// assert_eq!(range.end(), 7);
/// assert!(range.intersects(ByteRange::new(6, 10)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ByteRange {
    /// Start byte offset (inclusive).
    pub offset: usize,
    /// Number of bytes covered.
    pub length: usize,
}

impl ByteRange {
    /// Creates a range from a start offset and a length.
    #[must_use]
    pub const fn new(offset: usize, length: usize) -> Self {
        Self { offset, length }
    }

    /// Creates a range from a standard half-open range.
    #[must_use]
    pub const fn from_std(range: std::ops::Range<usize>) -> Self {
        Self {
            offset: range.start,
            length: range.end.saturating_sub(range.start),
        }
    }

    /// Returns the inclusive start offset.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Returns the number of bytes covered.
    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }

    /// Returns the exclusive end offset.
    #[must_use]
    pub const fn end(&self) -> usize {
        self.offset.saturating_add(self.length)
    }

    /// Returns the range as a standard half-open range.
    #[must_use]
    pub const fn as_std(&self) -> std::ops::Range<usize> {
        self.offset..self.end()
    }

    /// Returns whether the two ranges share at least one byte.
    ///
    /// Empty ranges intersect nothing.
    #[must_use]
    pub const fn intersects(&self, other: Self) -> bool {
        self.offset < other.end() && other.offset < self.end()
    }
}

/// A range in the caller's reporting coordinates.
///
/// The unit is chosen by the [`SourceText`](crate::SourceText)
/// implementation that produced it; [`SourceFile`](crate::SourceFile) uses
/// UTF-16 code units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReportRange {
    /// Start position (inclusive).
    pub location: usize,
    /// Number of units covered.
    pub length: usize,
}

impl ReportRange {
    /// Creates a report range from a start position and a length.
    #[must_use]
    pub const fn new(location: usize, length: usize) -> Self {
        Self { location, length }
    }

    /// Returns the inclusive start position.
    #[must_use]
    pub const fn location(&self) -> usize {
        self.location
    }

    /// Returns the number of units covered.
    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }

    /// Returns the exclusive end position.
    #[must_use]
    pub const fn end(&self) -> usize {
        self.location.saturating_add(self.length)
    }

    /// Returns the smallest range covering both ranges.
    ///
    /// Zero-length ranges take part in the union, so an empty anchor widens
    /// the result to its position.
    #[must_use]
    pub fn union(&self, other: Self) -> Self {
        let location = self.location.min(other.location);
        let end = self.end().max(other.end());
        Self::new(location, end.saturating_sub(location))
    }
}

/// The final range reported for one colon-spacing violation.
///
/// It spans from the start of the identifier before the colon to the end of
/// the matched text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ViolationRange(ReportRange);

impl ViolationRange {
    /// Wraps a report range.
    #[must_use]
    pub const fn new(range: ReportRange) -> Self {
        Self(range)
    }

    /// Returns the underlying report range.
    #[must_use]
    pub const fn range(&self) -> ReportRange {
        self.0
    }

    /// Returns the inclusive start position.
    #[must_use]
    pub const fn location(&self) -> usize {
        self.0.location
    }

    /// Returns the number of units covered.
    #[must_use]
    pub const fn length(&self) -> usize {
        self.0.length
    }
}

impl From<ReportRange> for ViolationRange {
    fn from(range: ReportRange) -> Self {
        Self(range)
    }
}
