//! Language detection and per-grammar token classification tables.
//!
//! Each [`SupportedLanguage`] maps to a Tree-sitter grammar and to a
//! [`NodeKinds`] table naming which grammar nodes become which
//! [`SyntaxKind`].

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use colonnade_core::SyntaxKind;
use thiserror::Error;

/// Languages the tokenizer can classify.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SupportedLanguage {
    /// Rust source files (`.rs`).
    #[default]
    Rust,
    /// Python source files (`.py`, `.pyi`).
    Python,
    /// TypeScript source files (`.ts`, `.tsx`, `.mts`, `.cts`).
    TypeScript,
}

/// Grammar node kinds reported as whole tokens, grouped by [`SyntaxKind`].
///
/// Nodes not listed here are descended into; unlisted word-like leaves are
/// keywords and every other leaf (punctuation, operators) is dropped.
#[derive(Debug)]
pub(crate) struct NodeKinds {
    identifiers: &'static [&'static str],
    type_identifiers: &'static [&'static str],
    builtin_types: &'static [&'static str],
    comments: &'static [&'static str],
    strings: &'static [&'static str],
    numbers: &'static [&'static str],
    /// Parent node whose identifier children are in type position.
    type_container: Option<&'static str>,
}

impl NodeKinds {
    /// Classifies a node by its kind and its parent's kind.
    pub(crate) fn classify(&self, kind: &str, parent: Option<&str>) -> Option<SyntaxKind> {
        if self.type_identifiers.contains(&kind) {
            return Some(SyntaxKind::TypeIdentifier);
        }
        if self.identifiers.contains(&kind) {
            let in_type_position = self.type_container.is_some() && parent == self.type_container;
            return Some(if in_type_position {
                SyntaxKind::TypeIdentifier
            } else {
                SyntaxKind::Identifier
            });
        }
        if self.builtin_types.contains(&kind) {
            return Some(SyntaxKind::Keyword);
        }
        if self.comments.contains(&kind) {
            return Some(SyntaxKind::Comment);
        }
        if self.strings.contains(&kind) {
            return Some(SyntaxKind::String);
        }
        if self.numbers.contains(&kind) {
            return Some(SyntaxKind::Number);
        }
        None
    }
}

static RUST_NODES: NodeKinds = NodeKinds {
    identifiers: &["identifier", "field_identifier", "shorthand_field_identifier"],
    type_identifiers: &["type_identifier"],
    builtin_types: &["primitive_type"],
    comments: &["line_comment", "block_comment"],
    strings: &["string_literal", "raw_string_literal", "char_literal"],
    numbers: &["integer_literal", "float_literal"],
    type_container: None,
};

static PYTHON_NODES: NodeKinds = NodeKinds {
    identifiers: &["identifier"],
    type_identifiers: &[],
    builtin_types: &[],
    comments: &["comment"],
    strings: &["string", "concatenated_string"],
    numbers: &["integer", "float"],
    type_container: Some("type"),
};

static TYPESCRIPT_NODES: NodeKinds = NodeKinds {
    identifiers: &[
        "identifier",
        "property_identifier",
        "shorthand_property_identifier",
        "shorthand_property_identifier_pattern",
        "private_property_identifier",
        "statement_identifier",
    ],
    type_identifiers: &["type_identifier"],
    builtin_types: &["predefined_type"],
    comments: &["comment", "html_comment"],
    strings: &["string", "template_string", "regex"],
    numbers: &["number"],
    type_container: None,
};

impl SupportedLanguage {
    /// Detects the language from a file extension.
    ///
    /// Returns `None` if the extension is not recognised.
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<Self> {
        let normalised = ext.to_ascii_lowercase();
        match normalised.as_str() {
            "rs" => Some(Self::Rust),
            "py" | "pyi" => Some(Self::Python),
            "ts" | "tsx" | "mts" | "cts" => Some(Self::TypeScript),
            _ => None,
        }
    }

    /// Detects the language from a file path by examining its extension.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    /// Returns the Tree-sitter grammar for this language.
    #[must_use]
    pub fn tree_sitter_language(self) -> tree_sitter::Language {
        match self {
            Self::Rust => tree_sitter_rust::LANGUAGE.into(),
            Self::Python => tree_sitter_python::LANGUAGE.into(),
            // TSX is a superset, so `.ts` and `.tsx` share one grammar.
            Self::TypeScript => tree_sitter_typescript::LANGUAGE_TSX.into(),
        }
    }

    /// Returns the lower-case identifier for this language.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rust => "rust",
            Self::Python => "python",
            Self::TypeScript => "typescript",
        }
    }

    pub(crate) const fn node_kinds(self) -> &'static NodeKinds {
        match self {
            Self::Rust => &RUST_NODES,
            Self::Python => &PYTHON_NODES,
            Self::TypeScript => &TYPESCRIPT_NODES,
        }
    }
}

impl fmt::Display for SupportedLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error raised when parsing a language identifier fails.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unsupported language: '{0}'")]
pub struct LanguageParseError(String);

impl LanguageParseError {
    /// Returns the input that failed to parse.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.0
    }
}

impl FromStr for SupportedLanguage {
    type Err = LanguageParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let normalised = input.trim().to_ascii_lowercase();
        match normalised.as_str() {
            "rust" | "rs" => Ok(Self::Rust),
            "python" | "py" => Ok(Self::Python),
            "typescript" | "ts" => Ok(Self::TypeScript),
            other => Err(LanguageParseError(other.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("rs", SupportedLanguage::Rust)]
    #[case("PY", SupportedLanguage::Python)]
    #[case("pyi", SupportedLanguage::Python)]
    #[case("tsx", SupportedLanguage::TypeScript)]
    #[case("mts", SupportedLanguage::TypeScript)]
    fn from_extension_recognises_supported_languages(
        #[case] ext: &str,
        #[case] expected: SupportedLanguage,
    ) {
        assert_eq!(SupportedLanguage::from_extension(ext), Some(expected));
    }

    #[test]
    fn from_path_ignores_unknown_and_missing_extensions() {
        assert_eq!(SupportedLanguage::from_path(Path::new("Makefile")), None);
        assert_eq!(SupportedLanguage::from_path(Path::new("notes.swift")), None);
        assert_eq!(
            SupportedLanguage::from_path(Path::new("src/lib.rs")),
            Some(SupportedLanguage::Rust)
        );
    }

    #[rstest]
    #[case(" Rust ", SupportedLanguage::Rust)]
    #[case("ts", SupportedLanguage::TypeScript)]
    fn from_str_parses_language_names(#[case] input: &str, #[case] expected: SupportedLanguage) {
        assert_eq!(SupportedLanguage::from_str(input), Ok(expected));
    }

    #[test]
    fn from_str_reports_the_rejected_input() {
        let error = "Go".parse::<SupportedLanguage>().expect_err("unsupported");
        assert_eq!(error.input(), "go");
    }

    #[rstest]
    #[case(SupportedLanguage::Rust, "type_identifier", None, Some(SyntaxKind::TypeIdentifier))]
    #[case(SupportedLanguage::Rust, "field_identifier", None, Some(SyntaxKind::Identifier))]
    #[case(SupportedLanguage::Rust, "primitive_type", None, Some(SyntaxKind::Keyword))]
    #[case(SupportedLanguage::Rust, "line_comment", None, Some(SyntaxKind::Comment))]
    #[case(SupportedLanguage::Rust, "let_declaration", None, None)]
    #[case(SupportedLanguage::Python, "identifier", Some("type"), Some(SyntaxKind::TypeIdentifier))]
    #[case(SupportedLanguage::Python, "identifier", Some("typed_parameter"), Some(SyntaxKind::Identifier))]
    #[case(SupportedLanguage::Python, "string", None, Some(SyntaxKind::String))]
    #[case(SupportedLanguage::TypeScript, "identifier", Some("type"), Some(SyntaxKind::Identifier))]
    #[case(SupportedLanguage::TypeScript, "predefined_type", None, Some(SyntaxKind::Keyword))]
    #[case(SupportedLanguage::TypeScript, "template_string", None, Some(SyntaxKind::String))]
    fn node_kinds_classify_grammar_nodes(
        #[case] language: SupportedLanguage,
        #[case] kind: &str,
        #[case] parent: Option<&str>,
        #[case] expected: Option<SyntaxKind>,
    ) {
        assert_eq!(language.node_kinds().classify(kind, parent), expected);
    }
}
