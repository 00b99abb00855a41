//! Decides whether a candidate match is a type-annotation colon.
//!
//! A textual match only says "a word, a colon and odd spacing". The tokens
//! around it say whether that colon introduces a type:
//!
//! | left              | right             | eligible                 |
//! | ----------------- | ----------------- | ------------------------ |
//! | identifier        | type identifier   | yes                      |
//! | type identifier   | type identifier   | yes                      |
//! | identifier        | keyword           | if the keyword is a type |
//! | type identifier   | keyword           | if the keyword is a type |
//! | keyword           | type identifier   | if the keyword is a type |
//!
//! Everything else (ternaries, labels, dictionary literals with value-level
//! keys, literals) is not an annotation.

use unicode_general_category::{GeneralCategory, get_general_category};

use colonnade_core::{
    ColonConfiguration, MatchCandidate, Rejection, SourceText, SyntaxKind, SyntaxToken,
};

/// Returns whether a scalar value is in the uppercase-letter category.
///
/// Both `Lu` and titlecase `Lt` letters count. Uppercase-looking symbols
/// outside the letter categories (Roman numerals, circled letters) do not.
#[must_use]
pub fn is_uppercase_letter(value: char) -> bool {
    matches!(
        get_general_category(value),
        GeneralCategory::UppercaseLetter | GeneralCategory::TitlecaseLetter
    )
}

/// Returns whether a token names a type.
///
/// Type identifiers always do. Any other token does when its text starts
/// with an uppercase letter, which catches keywords spelled like type names
/// (`Any`, `Self`).
#[must_use]
pub fn is_type_like<S: SourceText + ?Sized>(token: &SyntaxToken, source: &S) -> bool {
    if token.kind == SyntaxKind::TypeIdentifier {
        return true;
    }
    source
        .substring(token.byte_range())
        .and_then(|text| text.chars().next())
        .is_some_and(is_uppercase_letter)
}

/// Applies the token-kind decision table to candidates.
#[derive(Debug)]
pub struct ViolationClassifier<'a, S: ?Sized> {
    config: ColonConfiguration,
    source: &'a S,
}

impl<'a, S: SourceText + ?Sized> ViolationClassifier<'a, S> {
    /// Creates a classifier for one source file.
    #[must_use]
    pub const fn new(config: ColonConfiguration, source: &'a S) -> Self {
        Self { config, source }
    }

    /// Classifies a candidate.
    ///
    /// Returns the tokens before and after the colon when the candidate is a
    /// violation, or the reason it is not.
    ///
    /// # Errors
    ///
    /// Returns the [`Rejection`] explaining why the candidate is discarded.
    pub fn classify<'c>(
        &self,
        candidate: &'c MatchCandidate,
    ) -> Result<(&'c SyntaxToken, &'c SyntaxToken), Rejection> {
        let (left, right) = candidate.token_pair().ok_or(Rejection::TokenCount)?;

        if !self.config.apply_to_dictionaries() && self.is_dictionary_literal(left, right) {
            return Err(Rejection::Dictionary);
        }
        if left.kind.is_comment_or_string() || right.kind.is_comment_or_string() {
            return Err(Rejection::CommentOrString);
        }
        if !self.has_annotation_kinds(left, right) {
            return Err(Rejection::Kind);
        }
        Ok((left, right))
    }

    fn has_annotation_kinds(&self, left: &SyntaxToken, right: &SyntaxToken) -> bool {
        match (left.kind, right.kind) {
            (SyntaxKind::Identifier | SyntaxKind::TypeIdentifier, SyntaxKind::TypeIdentifier) => {
                true
            }
            (SyntaxKind::Identifier | SyntaxKind::TypeIdentifier, SyntaxKind::Keyword) => {
                is_type_like(right, self.source)
            }
            (SyntaxKind::Keyword, SyntaxKind::TypeIdentifier) => is_type_like(left, self.source),
            _ => false,
        }
    }

    /// Matches `[Key: Value]` where both sides are types.
    fn is_dictionary_literal(&self, left: &SyntaxToken, right: &SyntaxToken) -> bool {
        let both_types = match (left.kind, right.kind) {
            (SyntaxKind::TypeIdentifier, SyntaxKind::TypeIdentifier) => true,
            (SyntaxKind::TypeIdentifier, SyntaxKind::Keyword) => is_type_like(right, self.source),
            _ => false,
        };
        if !both_types {
            return false;
        }

        let text = self.source.text();
        first_non_whitespace_before(text, left.offset) == Some('[')
            && first_non_whitespace_after(text, right.end()) == Some(']')
    }
}

fn first_non_whitespace_before(text: &str, offset: usize) -> Option<char> {
    text.get(..offset)?
        .chars()
        .rev()
        .find(|value| !value.is_whitespace())
}

fn first_non_whitespace_after(text: &str, offset: usize) -> Option<char> {
    text.get(offset..)?
        .chars()
        .find(|value| !value.is_whitespace())
}
