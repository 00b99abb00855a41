//! Search expression for colons in type annotations.
//!
//! The expression has three parts:
//!
//! 1. `(\w)` anchors on the last character of the name before the colon;
//! 2. either whitespace before the colon (any amount after it), or a colon
//!    followed by the right-spacing shape that counts as wrong;
//! 3. `([\[|\(]*\S)` lands on the first character of the type, skipping
//!    opening brackets of nested collection or tuple types.
//!
//! Exactly one space after the colon is the accepted style, so it never
//! matches the right-hand branch. Whitespace before the colon is always a
//! candidate whatever the right-spacing mode.

use regex::{Matches, Regex};

use colonnade_core::ColonError;

const IDENTIFIER_ANCHOR: &str = r"(\w)";
const SPACE_BEFORE_COLON: &str = r"\s+:\s*";
const TYPE_START: &str = r"([\[|\(]*\S)";
const STRICT_RIGHT_SPACING: &str = r"(?:\s{0})";
const FLEXIBLE_RIGHT_SPACING: &str = r"(?:\s{0}|\s{2,})";

/// The compiled search expression for one right-spacing mode.
#[derive(Debug, Clone)]
pub struct TypeAnnotationPattern {
    regex: Regex,
    strict_right_spacing: bool,
}

impl TypeAnnotationPattern {
    /// Returns the expression text for a right-spacing mode.
    ///
    /// In strict mode only a colon directly followed by the type is a
    /// candidate on the right-hand branch; otherwise two or more whitespace
    /// characters are too.
    #[must_use]
    pub fn source(strict_right_spacing: bool) -> String {
        let right_spacing = if strict_right_spacing {
            STRICT_RIGHT_SPACING
        } else {
            FLEXIBLE_RIGHT_SPACING
        };
        format!("{IDENTIFIER_ANCHOR}(?:{SPACE_BEFORE_COLON}|:{right_spacing}){TYPE_START}")
    }

    /// Builds and compiles the expression for a right-spacing mode.
    ///
    /// # Errors
    ///
    /// Returns [`ColonError::InvalidPattern`] if the expression fails to
    /// compile.
    pub fn compile(strict_right_spacing: bool) -> Result<Self, ColonError> {
        let source = Self::source(strict_right_spacing);
        let regex = Regex::new(&source)
            .map_err(|error| ColonError::invalid_pattern(source.as_str(), error.to_string()))?;
        Ok(Self {
            regex,
            strict_right_spacing,
        })
    }

    /// Returns the expression text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Returns the right-spacing mode the expression was built for.
    #[must_use]
    pub const fn strict_right_spacing(&self) -> bool {
        self.strict_right_spacing
    }

    /// Iterates over the non-overlapping matches in `text`.
    pub(crate) fn find_iter<'r, 'h>(&'r self, text: &'h str) -> Matches<'r, 'h> {
        self.regex.find_iter(text)
    }
}
