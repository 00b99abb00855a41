//! Classified syntax tokens and the tokenizer collaborator.

use std::fmt;

use crate::span::ByteRange;

/// Semantic category of a syntax token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum SyntaxKind {
    /// A value-level name such as a variable, parameter or field.
    Identifier,
    /// A name used in type position.
    TypeIdentifier,
    /// A reserved word, including built-in type names.
    Keyword,
    /// An ordinary comment.
    Comment,
    /// A documentation comment.
    DocComment,
    /// A string or character literal.
    String,
    /// A numeric literal.
    Number,
    /// Anything else the tokenizer chose to report.
    Other,
}

impl SyntaxKind {
    /// Returns whether the kind is a comment or a string literal.
    ///
    /// Colons inside these tokens never belong to a type annotation.
    #[must_use]
    pub const fn is_comment_or_string(self) -> bool {
        matches!(self, Self::Comment | Self::DocComment | Self::String)
    }

    /// Returns the lower-case identifier for this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Identifier => "identifier",
            Self::TypeIdentifier => "type_identifier",
            Self::Keyword => "keyword",
            Self::Comment => "comment",
            Self::DocComment => "doc_comment",
            Self::String => "string",
            Self::Number => "number",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for SyntaxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A token reported by the tokenizer: a byte range tagged with a kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SyntaxToken {
    /// Start byte offset.
    pub offset: usize,
    /// Length in bytes.
    pub length: usize,
    /// Semantic category.
    pub kind: SyntaxKind,
}

impl SyntaxToken {
    /// Creates a token.
    #[must_use]
    pub const fn new(offset: usize, length: usize, kind: SyntaxKind) -> Self {
        Self {
            offset,
            length,
            kind,
        }
    }

    /// Returns the byte range covered by the token.
    #[must_use]
    pub const fn byte_range(&self) -> ByteRange {
        ByteRange::new(self.offset, self.length)
    }

    /// Returns the exclusive end offset.
    #[must_use]
    pub const fn end(&self) -> usize {
        self.offset.saturating_add(self.length)
    }
}

/// Supplies the classified tokens of one source file.
///
/// Implementations must return tokens in source order and may compute them
/// eagerly or on demand.
pub trait SyntaxTokenSource {
    /// Returns every token whose byte range intersects `range`.
    fn tokens_intersecting(&self, range: ByteRange) -> Vec<SyntaxToken>;
}

/// A pre-computed token stream sorted by offset.
impl SyntaxTokenSource for [SyntaxToken] {
    fn tokens_intersecting(&self, range: ByteRange) -> Vec<SyntaxToken> {
        let first = self.partition_point(|token| token.end() <= range.offset());
        self.iter()
            .skip(first)
            .take_while(|token| token.offset < range.end())
            .filter(|token| token.byte_range().intersects(range))
            .copied()
            .collect()
    }
}

impl SyntaxTokenSource for Vec<SyntaxToken> {
    fn tokens_intersecting(&self, range: ByteRange) -> Vec<SyntaxToken> {
        self.as_slice().tokens_intersecting(range)
    }
}

impl<T: SyntaxTokenSource + ?Sized> SyntaxTokenSource for &T {
    fn tokens_intersecting(&self, range: ByteRange) -> Vec<SyntaxToken> {
        (**self).tokens_intersecting(range)
    }
}
