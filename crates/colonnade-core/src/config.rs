//! Colon rule configuration.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::error::ColonError;

/// Severity attached to reported violations.
///
/// The detection pipeline never reads this value; it is carried so callers
/// can report violations at the configured level.
#[derive(
    Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq, Hash, EnumString, Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Severity {
    /// Violations are reported as warnings.
    #[default]
    Warning,
    /// Violations are reported as errors.
    Error,
}

/// Errors encountered while parsing a [`Severity`] from text.
pub type SeverityParseError = strum::ParseError;

/// Options controlling which colon placements count as violations.
///
/// # Defaults
///
/// - `strict_right_spacing`: `false` (zero or two-or-more spaces after the
///   colon are candidates)
/// - `apply_to_dictionaries`: `true`
/// - `severity`: [`Severity::Warning`]
///
/// # Example
///
/// ```
/// use colonnade_core::ColonConfiguration;
///
/// let config = ColonConfiguration::from_yaml_str("apply_to_dictionaries: false")?;
/// assert!(!config.apply_to_dictionaries());
/// assert!(!config.strict_right_spacing());
/// # Ok::<(), colonnade_core::ColonError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColonConfiguration {
    /// Whether only the zero-space right side is a candidate.
    #[serde(alias = "flexible_right_spacing")]
    strict_right_spacing: bool,
    /// Whether bracketed `[Key: Value]` type literals are checked.
    apply_to_dictionaries: bool,
    /// Reporting severity.
    severity: Severity,
}

impl ColonConfiguration {
    /// Creates a configuration with explicit spacing and dictionary flags.
    #[must_use]
    pub const fn new(strict_right_spacing: bool, apply_to_dictionaries: bool) -> Self {
        Self {
            strict_right_spacing,
            apply_to_dictionaries,
            severity: Severity::Warning,
        }
    }

    /// Reads a configuration from a YAML mapping.
    ///
    /// Missing keys take their default values; unknown keys are rejected.
    ///
    /// # Errors
    ///
    /// Returns [`ColonError::InvalidConfiguration`] when the document is not
    /// a mapping of recognised keys to values of the right type.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ColonError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_saphyr::from_str(yaml)
            .map_err(|error| ColonError::invalid_configuration(error.to_string()))
    }

    /// Returns a copy with the right-spacing mode replaced.
    #[must_use]
    pub const fn with_strict_right_spacing(mut self, strict_right_spacing: bool) -> Self {
        self.strict_right_spacing = strict_right_spacing;
        self
    }

    /// Returns a copy with the dictionary mode replaced.
    #[must_use]
    pub const fn with_apply_to_dictionaries(mut self, apply_to_dictionaries: bool) -> Self {
        self.apply_to_dictionaries = apply_to_dictionaries;
        self
    }

    /// Returns a copy with the severity replaced.
    #[must_use]
    pub const fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Returns whether only the zero-space right side is a candidate.
    #[must_use]
    pub const fn strict_right_spacing(&self) -> bool {
        self.strict_right_spacing
    }

    /// Returns whether dictionary type literals are checked.
    #[must_use]
    pub const fn apply_to_dictionaries(&self) -> bool {
        self.apply_to_dictionaries
    }

    /// Returns the reporting severity.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        self.severity
    }
}

impl Default for ColonConfiguration {
    fn default() -> Self {
        Self::new(false, true)
    }
}
