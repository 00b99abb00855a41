//! Core data model for the Colonnade colon-spacing rule.
//!
//! This crate provides the type definitions shared by the detection engine
//! and its collaborators: rule configuration, byte and report ranges, syntax
//! tokens, the collaborator traits through which source text and tokens are
//! consumed, and the candidate and outcome types passed between pipeline
//! stages. It is re-exported by the `colonnade` facade crate.
//!
//! # Core types
//!
//! - [`ColonConfiguration`] and [`Severity`]: rule options
//! - [`ByteRange`], [`ReportRange`] and [`ViolationRange`]: source positions
//! - [`SyntaxKind`] and [`SyntaxToken`]: classified tokens
//! - [`SyntaxTokenSource`]: the tokenizer collaborator
//! - [`SourceText`] and [`SourceFile`]: the text collaborator
//! - [`MatchCandidate`], [`CandidateOutcome`] and [`Rejection`]: pipeline
//!   handoff and results
//! - [`ColonError`]: construction failures
//!
//! # Example
//!
//! ```
//! use colonnade_core::{ByteRange, SourceFile, SourceText};
//!
//! let file = SourceFile::new("let x:Int");
//! let range = file.byte_range_to_report_range(ByteRange::new(4, 3));
//! assert_eq!(range.map(|r| r.location()), Some(4));
//! ```

mod candidate;
mod config;
mod error;
mod source;
mod span;
mod token;

pub use candidate::{CandidateEvaluation, CandidateOutcome, MatchCandidate, Rejection};
pub use config::{ColonConfiguration, Severity, SeverityParseError};
pub use error::ColonError;
pub use source::{SourceFile, SourceText};
pub use span::{ByteRange, ReportRange, ViolationRange};
pub use token::{SyntaxKind, SyntaxToken, SyntaxTokenSource};

#[cfg(test)]
mod tests;
