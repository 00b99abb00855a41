//! Colonnade: colon-spacing checks for type annotations.
//!
//! This facade crate re-exports the data model from [`colonnade_core`] and
//! provides [`ColonRule`], which finds colons in `name: Type` annotations
//! whose spacing breaks the configured convention.
//!
//! Detection runs as four pure stages:
//!
//! 1. [`TypeAnnotationPattern`] builds the search expression from the
//!    right-spacing mode.
//! 2. [`scan`] matches it against the text and collects the tokens each
//!    match overlaps.
//! 3. [`ViolationClassifier`] rejects matches in comments, strings,
//!    ternaries, dictionary literals and other non-annotation contexts.
//! 4. [`resolve_violation_range`] widens accepted matches to start at the
//!    identifier before the colon.
//!
//! Tokens come from any [`SyntaxTokenSource`]; text and reporting
//! coordinates from any [`SourceText`].
//!
//! # Example
//!
//! ```
//! use colonnade::{ColonConfiguration, ColonRule, SourceFile, SyntaxKind, SyntaxToken};
//!
//! let rule = ColonRule::new(ColonConfiguration::default())?;
//! let source = SourceFile::new("let x:Int");
//! let tokens = vec![
//!     SyntaxToken::new(0, 3, SyntaxKind::Keyword),
//!     SyntaxToken::new(4, 1, SyntaxKind::Identifier),
//!     SyntaxToken::new(6, 3, SyntaxKind::TypeIdentifier),
//! ];
//!
//! let violations: Vec<_> = rule.find_violations(&source, &tokens).collect();
//! assert_eq!(violations.len(), 1);
//! # Ok::<(), colonnade::ColonError>(())
//! ```

mod classifier;
mod pattern;
mod resolver;
mod rule;
mod scanner;

pub use colonnade_core::{
    ByteRange, CandidateEvaluation, CandidateOutcome, ColonConfiguration, ColonError,
    MatchCandidate, Rejection, ReportRange, Severity, SeverityParseError, SourceFile, SourceText,
    SyntaxKind, SyntaxToken, SyntaxTokenSource, ViolationRange,
};

pub use classifier::{ViolationClassifier, is_type_like, is_uppercase_letter};
pub use pattern::TypeAnnotationPattern;
pub use resolver::resolve_violation_range;
pub use rule::{ColonRule, RuleDescription};
pub use scanner::scan;

#[cfg(test)]
mod tests;
