//! Error types for rule construction.
//!
//! Detection itself never fails: every unexpected input resolves to a
//! rejected candidate. Only building a rule from configuration can go wrong.

use thiserror::Error;

/// Errors raised while configuring or constructing the colon rule.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ColonError {
    /// The generated search pattern failed to compile.
    #[error("invalid search pattern `{pattern}`: {message}")]
    InvalidPattern {
        /// The pattern text that was rejected.
        pattern: String,
        /// Description of the compilation failure.
        message: String,
    },

    /// The rule configuration could not be read.
    #[error("invalid colon rule configuration: {message}")]
    InvalidConfiguration {
        /// Description of the configuration problem.
        message: String,
    },
}

impl ColonError {
    /// Creates an invalid pattern error.
    #[must_use]
    pub fn invalid_pattern(pattern: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            message: message.into(),
        }
    }

    /// Creates an invalid configuration error.
    #[must_use]
    pub fn invalid_configuration(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            message: message.into(),
        }
    }
}
