//! Tree-sitter powered token classification for the colon rule.
//!
//! The rule engine in `colonnade` works on a stream of classified tokens and
//! never parses source itself. This crate produces that stream from real
//! source files: it parses with Tree-sitter and flattens the tree into a
//! [`SyntaxMap`], which implements [`colonnade_core::SyntaxTokenSource`].
//!
//! # Supported Languages
//!
//! - Rust (`.rs`)
//! - Python (`.py`, `.pyi`)
//! - TypeScript (`.ts`, `.tsx`, `.mts`, `.cts`)
//!
//! # Example
//!
//! ```
//! use colonnade::{ColonConfiguration, ColonRule};
//! use colonnade_syntax::{SupportedLanguage, SyntaxMap};
//!
//! let source = "fn main() { let name:String = String::new(); }";
//! let tokens = SyntaxMap::parse(SupportedLanguage::Rust, source)?;
//! let rule = ColonRule::new(ColonConfiguration::default())?;
//!
//! assert_eq!(rule.find_violations(source, &tokens).count(), 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod error;
mod language;
mod parser;
mod syntax_map;

pub use error::SyntaxError;
pub use language::{LanguageParseError, SupportedLanguage};
pub use parser::{ParseResult, Parser};
pub use syntax_map::SyntaxMap;

#[cfg(test)]
mod tests;
