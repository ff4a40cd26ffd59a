//! Bias toward Online coaching for unpredictable schedules.
//!
//! A prospect who travels a lot, or whose weekly availability varies, needs
//! a program that moves with them. This rule fires even when the support
//! answer was `Execute`; it outranks the self-guided default.

use crate::answers::{AssessmentAnswers, Constraint, Frequency, OfferTier};
use crate::traits::Rule;

/// Routes travel-constrained or variable-schedule prospects to `Online`.
///
/// ## Algorithm
/// Matches when the constraint answer is `Travel` OR the frequency answer
/// is `Varies`. Either signal alone is enough.
pub struct TravelVariabilityRule;

impl Rule for TravelVariabilityRule {
    fn name(&self) -> &str {
        "TravelVariabilityRule"
    }

    fn evaluate(&self, answers: &AssessmentAnswers) -> Option<OfferTier> {
        let travels = answers.constraint == Some(Constraint::Travel);
        let varies = answers.frequency == Some(Frequency::Varies);

        if travels || varies {
            Some(OfferTier::Online)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_travel_constraint_matches() {
        let answers = AssessmentAnswers {
            constraint: Some(Constraint::Travel),
            ..Default::default()
        };
        assert_eq!(
            TravelVariabilityRule.evaluate(&answers),
            Some(OfferTier::Online)
        );
    }

    #[test]
    fn test_varying_frequency_matches() {
        let answers = AssessmentAnswers {
            frequency: Some(Frequency::Varies),
            ..Default::default()
        };
        assert_eq!(
            TravelVariabilityRule.evaluate(&answers),
            Some(OfferTier::Online)
        );
    }

    #[test]
    fn test_stable_schedule_falls_through() {
        let answers = AssessmentAnswers {
            constraint: Some(Constraint::Time),
            frequency: Some(Frequency::Three),
            ..Default::default()
        };
        assert_eq!(TravelVariabilityRule.evaluate(&answers), None);
    }
}
