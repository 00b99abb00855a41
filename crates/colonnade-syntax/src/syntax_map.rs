//! Flattens a Tree-sitter tree into classified tokens.
//!
//! The walk reports the same kind of stream a syntax highlighter would:
//! names, keywords, literals and comments, each once and in source order.
//! Literals and comments are reported whole even when the grammar gives
//! them children, and punctuation is never a token, so the colon of an
//! annotation falls between the two tokens it separates.

use std::path::Path;

use tracing::debug;

use colonnade_core::{ByteRange, SyntaxKind, SyntaxToken, SyntaxTokenSource};

use crate::error::SyntaxError;
use crate::language::{NodeKinds, SupportedLanguage};
use crate::parser::{ParseResult, Parser};

/// Tracing target for syntax map construction.
const SYNTAX_MAP_TARGET: &str = "colonnade_syntax::syntax_map";

/// The classified tokens of one source file, sorted by offset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyntaxMap {
    tokens: Vec<SyntaxToken>,
}

impl SyntaxMap {
    /// Parses `source` and builds its syntax map.
    ///
    /// # Errors
    ///
    /// Returns an error if the parser cannot be initialised or produces no
    /// tree.
    pub fn parse(language: SupportedLanguage, source: &str) -> Result<Self, SyntaxError> {
        let mut parser = Parser::new(language)?;
        let parsed = parser.parse(source)?;
        Ok(Self::from_parse_result(&parsed))
    }

    /// Parses `source` in the language implied by `path`'s extension.
    ///
    /// # Errors
    ///
    /// Returns [`SyntaxError::UnknownLanguage`] if the extension is not
    /// recognised, or any error from [`Self::parse`].
    pub fn for_path(path: &Path, source: &str) -> Result<Self, SyntaxError> {
        let language = SupportedLanguage::from_path(path)
            .ok_or_else(|| SyntaxError::unknown_language(path.to_path_buf()))?;
        Self::parse(language, source)
    }

    /// Builds the syntax map of an existing parse result.
    #[must_use]
    pub fn from_parse_result(parsed: &ParseResult) -> Self {
        let mut tokens = Vec::new();
        let kinds = parsed.language().node_kinds();
        collect_tokens(parsed.root_node(), parsed.source(), kinds, &mut tokens);

        debug!(
            target: SYNTAX_MAP_TARGET,
            language = %parsed.language(),
            tokens = tokens.len(),
            recovered = parsed.has_errors(),
            "built syntax map"
        );
        Self { tokens }
    }

    /// Wraps tokens produced elsewhere, sorting them by offset.
    #[must_use]
    pub fn from_tokens(mut tokens: Vec<SyntaxToken>) -> Self {
        tokens.sort_by_key(|token| (token.offset, token.length));
        Self { tokens }
    }

    /// Returns all tokens in source order.
    #[must_use]
    pub const fn tokens(&self) -> &[SyntaxToken] {
        self.tokens.as_slice()
    }

    /// Returns the number of tokens.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns whether the map holds no tokens.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl SyntaxTokenSource for SyntaxMap {
    fn tokens_intersecting(&self, range: ByteRange) -> Vec<SyntaxToken> {
        self.tokens.as_slice().tokens_intersecting(range)
    }
}

fn collect_tokens(
    node: tree_sitter::Node<'_>,
    source: &str,
    kinds: &NodeKinds,
    tokens: &mut Vec<SyntaxToken>,
) {
    let range = node.byte_range();
    if node.is_missing() || range.is_empty() {
        return;
    }

    let parent = node.parent();
    let parent_kind = parent.as_ref().map(tree_sitter::Node::kind);
    if let Some(kind) = kinds.classify(node.kind(), parent_kind) {
        let refined = if kind == SyntaxKind::Comment {
            comment_kind(source.get(range.clone()).unwrap_or_default())
        } else {
            kind
        };
        tokens.push(SyntaxToken::new(range.start, range.len(), refined));
        return;
    }

    if node.child_count() == 0 {
        if source.get(range.clone()).is_some_and(is_word) {
            tokens.push(SyntaxToken::new(range.start, range.len(), SyntaxKind::Keyword));
        }
        return;
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        collect_tokens(child, source, kinds, tokens);
    }
}

/// Distinguishes documentation comments from ordinary ones.
fn comment_kind(text: &str) -> SyntaxKind {
    let is_doc = (text.starts_with("///") && !text.starts_with("////"))
        || text.starts_with("//!")
        || (text.starts_with("/**") && text != "/**/")
        || text.starts_with("/*!");
    if is_doc {
        SyntaxKind::DocComment
    } else {
        SyntaxKind::Comment
    }
}

/// Returns whether a leaf's text reads like a reserved word.
fn is_word(text: &str) -> bool {
    let mut chars = text.chars();
    chars
        .next()
        .is_some_and(|first| first.is_alphabetic() || first == '_')
        && chars.all(|rest| rest.is_alphanumeric() || rest == '_')
}
