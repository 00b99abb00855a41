//! Unit tests for syntax map construction over real grammars.

use std::path::Path;

use rstest::rstest;

use colonnade_core::{ByteRange, SyntaxKind, SyntaxTokenSource};

use crate::{SupportedLanguage, SyntaxError, SyntaxMap};

/// Returns the kind of the first token whose text is exactly `word`.
fn kind_of(map: &SyntaxMap, source: &str, word: &str) -> Option<SyntaxKind> {
    map.tokens()
        .iter()
        .find(|token| source.get(token.offset..token.end()) == Some(word))
        .map(|token| token.kind)
}

// =============================================================================
// Classification
// =============================================================================

#[rstest]
#[case(SupportedLanguage::Rust, "fn f() { let name:String = value; }", "name", SyntaxKind::Identifier)]
#[case(SupportedLanguage::Rust, "fn f() { let name:String = value; }", "String", SyntaxKind::TypeIdentifier)]
#[case(SupportedLanguage::Rust, "fn f() { let name:String = value; }", "let", SyntaxKind::Keyword)]
#[case(SupportedLanguage::Rust, "fn f() { let count:i32 = 1; }", "i32", SyntaxKind::Keyword)]
#[case(SupportedLanguage::Rust, "fn f() { let count:i32 = 1; }", "1", SyntaxKind::Number)]
#[case(SupportedLanguage::Python, "def f(x:int):\n    pass", "x", SyntaxKind::Identifier)]
#[case(SupportedLanguage::Python, "def f(x:int):\n    pass", "int", SyntaxKind::TypeIdentifier)]
#[case(SupportedLanguage::Python, "def f(x:int):\n    pass", "def", SyntaxKind::Keyword)]
#[case(SupportedLanguage::TypeScript, "let x:Foo = y;", "Foo", SyntaxKind::TypeIdentifier)]
#[case(SupportedLanguage::TypeScript, "let x:number = 1;", "number", SyntaxKind::Keyword)]
fn syntax_map_classifies_tokens(
    #[case] language: SupportedLanguage,
    #[case] source: &str,
    #[case] word: &str,
    #[case] expected: SyntaxKind,
) {
    let map = SyntaxMap::parse(language, source).expect("syntax map");
    assert_eq!(kind_of(&map, source, word), Some(expected));
}

#[test]
fn syntax_map_drops_punctuation() {
    let source = "fn f() { let name:String = value; }";
    let map = SyntaxMap::parse(SupportedLanguage::Rust, source).expect("syntax map");
    let colon = source.find(':').expect("colon");

    assert!(map.tokens_intersecting(ByteRange::new(colon, 1)).is_empty());
}

#[test]
fn syntax_map_tokens_are_sorted_and_disjoint() {
    let source = "fn f(a: u8) -> String { format!(\"{a}\") } // done";
    let map = SyntaxMap::parse(SupportedLanguage::Rust, source).expect("syntax map");

    for pair in map.tokens().windows(2) {
        let [first, second] = pair else {
            panic!("windows(2) yields pairs");
        };
        assert!(first.end() <= second.offset, "{first:?} overlaps {second:?}");
    }
}

// =============================================================================
// Comments and Strings
// =============================================================================

#[rstest]
#[case(SupportedLanguage::Rust, "fn f() {} // name:String", "//", SyntaxKind::Comment)]
#[case(SupportedLanguage::Rust, "/// name:String\nfn f() {}", "///", SyntaxKind::DocComment)]
#[case(SupportedLanguage::Python, "x = 1  # name:String", "#", SyntaxKind::Comment)]
#[case(SupportedLanguage::TypeScript, "/** name:String */\nlet x = 1;", "/**", SyntaxKind::DocComment)]
fn comments_are_single_tokens(
    #[case] language: SupportedLanguage,
    #[case] source: &str,
    #[case] marker: &str,
    #[case] expected: SyntaxKind,
) {
    let map = SyntaxMap::parse(language, source).expect("syntax map");
    let start = source.find(marker).expect("comment marker");
    let colon = source.find(':').expect("colon");

    let covering = map.tokens_intersecting(ByteRange::new(colon, 1));
    let [comment] = covering.as_slice() else {
        panic!("expected one token over the colon, got {covering:?}");
    };
    assert_eq!(comment.offset, start);
    assert_eq!(comment.kind, expected);
}

#[rstest]
#[case(SupportedLanguage::Rust, "fn f() { let s = \"name:String\"; }")]
#[case(SupportedLanguage::Python, "s = 'name:String'")]
#[case(SupportedLanguage::TypeScript, "let s = `name:${x}`;")]
fn string_literals_are_single_tokens(#[case] language: SupportedLanguage, #[case] source: &str) {
    let map = SyntaxMap::parse(language, source).expect("syntax map");
    let colon = source.find(':').expect("colon");

    let covering = map.tokens_intersecting(ByteRange::new(colon, 1));
    let [literal] = covering.as_slice() else {
        panic!("expected one token over the colon, got {covering:?}");
    };
    assert_eq!(literal.kind, SyntaxKind::String);
}

// =============================================================================
// Language Detection
// =============================================================================

#[test]
fn for_path_uses_the_file_extension() {
    let map = SyntaxMap::for_path(Path::new("src/app.ts"), "let x:Foo = y;").expect("syntax map");
    assert_eq!(kind_of(&map, "let x:Foo = y;", "Foo"), Some(SyntaxKind::TypeIdentifier));
}

#[test]
fn for_path_rejects_unknown_extensions() {
    let result = SyntaxMap::for_path(Path::new("Sources/App.swift"), "let x:Int = 1");
    assert!(matches!(result, Err(SyntaxError::UnknownLanguage { .. })));
}

#[test]
fn broken_source_still_yields_tokens() {
    let source = "fn broken(x:String {";
    let map = SyntaxMap::parse(SupportedLanguage::Rust, source).expect("syntax map");
    assert_eq!(kind_of(&map, source, "broken"), Some(SyntaxKind::Identifier));
}
