//! Computes the reported range of an accepted candidate.

use colonnade_core::{ByteRange, SourceText, SyntaxToken, ViolationRange};

/// Widens a match to start at the identifier before the colon.
///
/// The match begins at the last character of that identifier, so a
/// zero-length anchor at the token's start is unioned with the match.
/// Returns `None` if either range cannot be translated into reporting
/// coordinates.
#[must_use]
pub fn resolve_violation_range<S: SourceText + ?Sized>(
    source: &S,
    identifier: &SyntaxToken,
    match_range: ByteRange,
) -> Option<ViolationRange> {
    let anchor = source.byte_range_to_report_range(ByteRange::new(identifier.offset, 0))?;
    let matched = source.byte_range_to_report_range(match_range)?;
    Some(ViolationRange::new(anchor.union(matched)))
}
