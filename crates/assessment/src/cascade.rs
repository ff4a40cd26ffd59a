//! The RuleCascade orchestrates the ordered routing rules.
//!
//! This module provides the RuleCascade struct that chains rules together
//! using the builder pattern, plus the `route` entry point that evaluates
//! the standard production cascade.

use crate::answers::{AssessmentAnswers, OfferTier};
use crate::rules::{
    InjuryOverrideRule, OverwhelmFrequencyRule, SupportModelRule, TravelVariabilityRule,
};
use crate::traits::Rule;
use tracing;

/// An ordered list of routing rules, first match wins.
///
/// ## Usage
/// ```ignore
/// let cascade = RuleCascade::new()
///     .add_rule(InjuryOverrideRule)
///     .add_rule(SupportModelRule);
///
/// let tier = cascade.evaluate(&answers);
/// ```
pub struct RuleCascade {
    rules: Vec<Box<dyn Rule>>,
    fallback: OfferTier,
}

impl RuleCascade {
    /// Create an empty cascade that falls back to the self-guided tier.
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            fallback: OfferTier::Reset,
        }
    }

    /// Add a rule to the end of the cascade (builder pattern).
    ///
    /// # Arguments
    /// * `rule` - Any type implementing the Rule trait
    ///
    /// # Returns
    /// Self for method chaining
    pub fn add_rule(mut self, rule: impl Rule + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Evaluate the cascade against an answer set.
    ///
    /// ## Algorithm
    /// 1. For each rule in order:
    ///    a. Log the rule name
    ///    b. Evaluate it; if it returns a tier, that tier wins
    /// 2. If no rule matched, return the fallback tier
    ///
    /// Total over every reachable input: unanswered questions fail each
    /// predicate and fall through rather than erroring.
    pub fn evaluate(&self, answers: &AssessmentAnswers) -> OfferTier {
        for rule in &self.rules {
            tracing::debug!("Evaluating rule: {}", rule.name());
            if let Some(tier) = rule.evaluate(answers) {
                tracing::debug!("Rule matched: {} -> {}", rule.name(), tier);
                return tier;
            }
        }
        tracing::debug!("No rule matched, falling back to {}", self.fallback);
        self.fallback
    }

    /// Evaluate the cascade and report which rule decided the outcome.
    ///
    /// Same policy as [`evaluate`](Self::evaluate), but returns the name of
    /// the matching rule (or `None` for the fallback) so callers can explain
    /// the recommendation.
    pub fn evaluate_explained(&self, answers: &AssessmentAnswers) -> (OfferTier, Option<&str>) {
        for rule in &self.rules {
            if let Some(tier) = rule.evaluate(answers) {
                return (tier, Some(rule.name()));
            }
        }
        (self.fallback, None)
    }

    /// The production cascade in its mandatory order.
    ///
    /// 1. Injury override (hard override, beats everything)
    /// 2. Support-model mapping
    /// 3. Travel/variability bias
    /// 4. Overwhelm + moderate-frequency bias
    ///
    /// The order must not change: an injured prospect who picked "Coached"
    /// must be decided by the injury rule, and a "Travel" constraint must be
    /// checked before the Execute answer resolves to the fallback.
    pub fn standard() -> Self {
        Self::new()
            .add_rule(InjuryOverrideRule)
            .add_rule(SupportModelRule)
            .add_rule(TravelVariabilityRule)
            .add_rule(OverwhelmFrequencyRule)
    }
}

impl Default for RuleCascade {
    fn default() -> Self {
        Self::standard()
    }
}

/// Route an answer set to an offer tier using the standard cascade.
///
/// This is the function the results screen calls once the final question is
/// answered. It is pure and never mutates its input, so it is also safe to
/// call mid-questionnaire for previews.
pub fn route(answers: &AssessmentAnswers) -> OfferTier {
    RuleCascade::standard().evaluate(answers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answers::{Constraint, Frequency, Injury, Support};

    #[test]
    fn test_empty_cascade_returns_fallback() {
        let cascade = RuleCascade::new();
        assert_eq!(cascade.evaluate(&AssessmentAnswers::new()), OfferTier::Reset);
    }

    #[test]
    fn test_empty_answers_route_to_reset() {
        // The UI may call route() before any question is answered.
        assert_eq!(route(&AssessmentAnswers::new()), OfferTier::Reset);
    }

    #[test]
    fn test_first_match_wins() {
        // Injury override and support mapping both match here; the injury
        // rule is first, so it decides.
        let answers = AssessmentAnswers {
            injury: Some(Injury::Shoulder),
            support: Some(Support::Accountable),
            ..Default::default()
        };

        let cascade = RuleCascade::standard();
        let (tier, rule) = cascade.evaluate_explained(&answers);
        assert_eq!(tier, OfferTier::Hybrid);
        assert_eq!(rule, Some("InjuryOverrideRule"));
    }

    #[test]
    fn test_travel_outranks_execute_default() {
        let answers = AssessmentAnswers {
            support: Some(Support::Execute),
            constraint: Some(Constraint::Travel),
            frequency: Some(Frequency::Three),
            injury: Some(Injury::None),
            ..Default::default()
        };
        assert_eq!(route(&answers), OfferTier::Online);
    }

    #[test]
    fn test_fallback_is_explained_as_no_rule() {
        let answers = AssessmentAnswers {
            support: Some(Support::Execute),
            injury: Some(Injury::None),
            ..Default::default()
        };

        let cascade = RuleCascade::standard();
        let (tier, rule) = cascade.evaluate_explained(&answers);
        assert_eq!(tier, OfferTier::Reset);
        assert_eq!(rule, None);
    }
}
