//! Unit tests for the `colonnade` engine.

use colonnade_core::{SyntaxKind, SyntaxToken};

mod pattern_tests;

/// Builds a synthetic token stream by locating each word in order.
///
/// Text between the words (punctuation, whitespace) produces no tokens,
/// matching what a tokenizer reports.
fn tokenize(text: &str, words: &[(&str, SyntaxKind)]) -> Vec<SyntaxToken> {
    let mut cursor = 0;
    words
        .iter()
        .map(|&(word, kind)| {
            let offset = text
                .get(cursor..)
                .and_then(|rest| rest.find(word))
                .map(|found| found + cursor)
                .unwrap_or_else(|| panic!("`{word}` not found in `{text}` after {cursor}"));
            cursor = offset + word.len();
            SyntaxToken::new(offset, word.len(), kind)
        })
        .collect()
}
