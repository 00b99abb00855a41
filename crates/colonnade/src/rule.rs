//! The colon rule: pattern, scanner, classifier and resolver wired together.

use tracing::debug;

use colonnade_core::{
    CandidateEvaluation, CandidateOutcome, ColonConfiguration, ColonError, MatchCandidate,
    Rejection, SourceText, SyntaxTokenSource, ViolationRange,
};

use crate::classifier::ViolationClassifier;
use crate::pattern::TypeAnnotationPattern;
use crate::resolver::resolve_violation_range;
use crate::scanner::scan;

/// Tracing target for rule evaluation.
const RULE_TARGET: &str = "colonnade::rule";

/// Static metadata a rule registry shows for the colon rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleDescription {
    /// Stable identifier used in configuration files.
    pub identifier: &'static str,
    /// Human-readable name.
    pub name: &'static str,
    /// One-sentence summary of the convention.
    pub description: &'static str,
}

const DESCRIPTION: RuleDescription = RuleDescription {
    identifier: "colon",
    name: "Colon Spacing",
    description: "Colons should be next to the identifier when specifying a type \
                  and next to the key in dictionary literals.",
};

/// Finds colon-spacing violations in type annotations.
///
/// A rule is immutable once built and may be shared across threads that
/// check different files.
///
/// # Example
///
/// ```
/// use colonnade::{ColonConfiguration, ColonRule, SyntaxKind, SyntaxToken};
///
/// let rule = ColonRule::new(ColonConfiguration::default())?;
/// let text = "let x: Int";
/// let tokens = vec![
///     SyntaxToken::new(0, 3, SyntaxKind::Keyword),
///     SyntaxToken::new(4, 1, SyntaxKind::Identifier),
///     SyntaxToken::new(7, 3, SyntaxKind::TypeIdentifier),
/// ];
/// assert_eq!(rule.find_violations(text, &tokens).count(), 0);
/// # Ok::<(), colonnade::ColonError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ColonRule {
    config: ColonConfiguration,
    pattern: TypeAnnotationPattern,
}

impl ColonRule {
    /// Builds the rule for a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ColonError::InvalidPattern`] if the search expression fails
    /// to compile.
    pub fn new(config: ColonConfiguration) -> Result<Self, ColonError> {
        let pattern = TypeAnnotationPattern::compile(config.strict_right_spacing())?;
        debug!(
            target: RULE_TARGET,
            pattern = pattern.as_str(),
            apply_to_dictionaries = config.apply_to_dictionaries(),
            "compiled colon rule"
        );
        Ok(Self { config, pattern })
    }

    /// Returns the rule's metadata.
    #[must_use]
    pub const fn description() -> &'static RuleDescription {
        &DESCRIPTION
    }

    /// Returns the configuration the rule was built with.
    #[must_use]
    pub const fn configuration(&self) -> &ColonConfiguration {
        &self.config
    }

    /// Returns the compiled search expression.
    #[must_use]
    pub const fn pattern(&self) -> &TypeAnnotationPattern {
        &self.pattern
    }

    /// Yields the range of every violation in `source`, in source order.
    ///
    /// The iterator is lazy and holds no state beyond the borrowed inputs;
    /// calling this again rescans from the start.
    pub fn find_violations<'a, S, T>(
        &'a self,
        source: &'a S,
        tokens: &'a T,
    ) -> impl Iterator<Item = ViolationRange> + 'a
    where
        S: SourceText + ?Sized,
        T: SyntaxTokenSource + ?Sized,
    {
        self.evaluate(source, tokens)
            .filter_map(|evaluation| evaluation.outcome.accepted())
    }

    /// Yields every candidate match with the pipeline's decision about it.
    ///
    /// This is the same pass as [`Self::find_violations`] without dropping
    /// rejected candidates.
    pub fn evaluate<'a, S, T>(
        &'a self,
        source: &'a S,
        tokens: &'a T,
    ) -> impl Iterator<Item = CandidateEvaluation> + 'a
    where
        S: SourceText + ?Sized,
        T: SyntaxTokenSource + ?Sized,
    {
        let classifier = ViolationClassifier::new(self.config, source);
        scan(&self.pattern, source.text(), tokens).map(move |candidate| {
            let outcome = decide(&classifier, source, &candidate);
            CandidateEvaluation::new(candidate.match_range(), outcome)
        })
    }
}

fn decide<S: SourceText + ?Sized>(
    classifier: &ViolationClassifier<'_, S>,
    source: &S,
    candidate: &MatchCandidate,
) -> CandidateOutcome {
    let resolved = classifier.classify(candidate).and_then(|(identifier, _)| {
        resolve_violation_range(source, identifier, candidate.match_range())
            .ok_or(Rejection::Unreportable)
    });

    match resolved {
        Ok(range) => CandidateOutcome::Accepted(range),
        Err(reason) => {
            debug!(
                target: RULE_TARGET,
                offset = candidate.match_range().offset(),
                length = candidate.match_range().length(),
                tokens = candidate.tokens().len(),
                %reason,
                "rejected colon candidate"
            );
            CandidateOutcome::Rejected(reason)
        }
    }
}
