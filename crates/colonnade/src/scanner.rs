//! Pairs pattern matches with the syntax tokens they overlap.

use colonnade_core::{ByteRange, MatchCandidate, SyntaxTokenSource};

use crate::pattern::TypeAnnotationPattern;

/// Runs `pattern` over `text` and yields one candidate per match.
///
/// Each candidate carries the tokens intersecting the match in source
/// order. Candidates are produced whatever their token count; the
/// classifier rejects those without exactly two tokens.
pub fn scan<'a, T>(
    pattern: &'a TypeAnnotationPattern,
    text: &'a str,
    tokens: &'a T,
) -> impl Iterator<Item = MatchCandidate> + 'a
where
    T: SyntaxTokenSource + ?Sized,
{
    pattern.find_iter(text).map(move |found| {
        let match_range = ByteRange::from_std(found.range());
        MatchCandidate::new(match_range, tokens.tokens_intersecting(match_range))
    })
}
