//! Candidate matches and the outcome of classifying them.

use std::fmt;

use crate::span::{ByteRange, ViolationRange};
use crate::token::SyntaxToken;

/// A textual match of the search pattern with the tokens it overlaps.
///
/// Candidates are produced by the scanner and consumed by the classifier;
/// they are not retained afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchCandidate {
    match_range: ByteRange,
    tokens: Vec<SyntaxToken>,
}

impl MatchCandidate {
    /// Creates a candidate from a match range and its tokens in source order.
    #[must_use]
    pub const fn new(match_range: ByteRange, tokens: Vec<SyntaxToken>) -> Self {
        Self {
            match_range,
            tokens,
        }
    }

    /// Returns the byte range of the pattern match.
    #[must_use]
    pub const fn match_range(&self) -> ByteRange {
        self.match_range
    }

    /// Returns the tokens intersecting the match.
    #[must_use]
    pub fn tokens(&self) -> &[SyntaxToken] {
        &self.tokens
    }

    /// Returns the tokens on either side of the colon.
    ///
    /// Only candidates overlapping exactly two tokens have a pair.
    #[must_use]
    pub fn token_pair(&self) -> Option<(&SyntaxToken, &SyntaxToken)> {
        match self.tokens.as_slice() {
            [left, right] => Some((left, right)),
            _ => None,
        }
    }
}

/// Why a candidate was not reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rejection {
    /// The match did not overlap exactly two tokens.
    TokenCount,
    /// The match sits inside a `[Key: Value]` type literal and dictionaries
    /// are exempt.
    Dictionary,
    /// The token kinds around the colon do not form a type annotation.
    Kind,
    /// One of the tokens is a comment or a string literal.
    CommentOrString,
    /// The match could not be translated into reporting coordinates.
    Unreportable,
}

impl Rejection {
    /// Returns a short lower-case label for logs and test output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TokenCount => "token_count",
            Self::Dictionary => "dictionary",
            Self::Kind => "kind",
            Self::CommentOrString => "comment_or_string",
            Self::Unreportable => "unreportable",
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of running one candidate through classification and resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CandidateOutcome {
    /// The candidate is a violation reported at this range.
    Accepted(ViolationRange),
    /// The candidate was discarded.
    Rejected(Rejection),
}

impl CandidateOutcome {
    /// Returns the violation range of an accepted candidate.
    #[must_use]
    pub const fn accepted(self) -> Option<ViolationRange> {
        match self {
            Self::Accepted(range) => Some(range),
            Self::Rejected(_) => None,
        }
    }

    /// Returns the reason a rejected candidate was discarded.
    #[must_use]
    pub const fn rejection(self) -> Option<Rejection> {
        match self {
            Self::Accepted(_) => None,
            Self::Rejected(reason) => Some(reason),
        }
    }
}

/// A candidate's match range paired with its outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CandidateEvaluation {
    /// The byte range the pattern matched.
    pub match_range: ByteRange,
    /// What the pipeline decided.
    pub outcome: CandidateOutcome,
}

impl CandidateEvaluation {
    /// Pairs a match range with its outcome.
    #[must_use]
    pub const fn new(match_range: ByteRange, outcome: CandidateOutcome) -> Self {
        Self {
            match_range,
            outcome,
        }
    }
}
