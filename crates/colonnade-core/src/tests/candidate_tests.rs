//! Tests for [`MatchCandidate`] and [`CandidateOutcome`].

use crate::{
    ByteRange, CandidateOutcome, MatchCandidate, Rejection, ReportRange, SyntaxKind, SyntaxToken,
    ViolationRange,
};

#[test]
fn candidate_with_two_tokens_has_a_pair() {
    let left = SyntaxToken::new(4, 1, SyntaxKind::Identifier);
    let right = SyntaxToken::new(6, 3, SyntaxKind::TypeIdentifier);
    let candidate = MatchCandidate::new(ByteRange::new(4, 3), vec![left, right]);

    assert_eq!(candidate.match_range(), ByteRange::new(4, 3));
    assert_eq!(candidate.token_pair(), Some((&left, &right)));
}

#[test]
fn candidate_with_other_token_counts_has_no_pair() {
    let token = SyntaxToken::new(0, 12, SyntaxKind::Comment);
    let single = MatchCandidate::new(ByteRange::new(3, 4), vec![token]);
    let empty = MatchCandidate::new(ByteRange::new(3, 4), Vec::new());
    let triple = MatchCandidate::new(ByteRange::new(0, 12), vec![token, token, token]);

    assert!(single.token_pair().is_none());
    assert!(empty.token_pair().is_none());
    assert!(triple.token_pair().is_none());
}

#[test]
fn outcome_accessors() {
    let range = ViolationRange::new(ReportRange::new(0, 3));
    let accepted = CandidateOutcome::Accepted(range);
    let rejected = CandidateOutcome::Rejected(Rejection::Dictionary);

    assert_eq!(accepted.accepted(), Some(range));
    assert_eq!(accepted.rejection(), None);
    assert_eq!(rejected.accepted(), None);
    assert_eq!(rejected.rejection(), Some(Rejection::Dictionary));
}

#[test]
fn rejection_labels() {
    assert_eq!(Rejection::CommentOrString.to_string(), "comment_or_string");
    assert_eq!(Rejection::TokenCount.as_str(), "token_count");
}
