//! Hard override for reported injuries.
//!
//! This is always the first rule in the cascade: an injury or pain signal
//! forces the highest-touch, technique-supervised offer no matter what
//! every other answer says.

use crate::answers::{AssessmentAnswers, Injury, OfferTier};
use crate::traits::Rule;

/// Routes any reported injury straight to `Hybrid`.
///
/// ## Algorithm
/// Matches when `injury` is answered with anything other than `None`.
pub struct InjuryOverrideRule;

impl Rule for InjuryOverrideRule {
    fn name(&self) -> &str {
        "InjuryOverrideRule"
    }

    fn evaluate(&self, answers: &AssessmentAnswers) -> Option<OfferTier> {
        match answers.injury {
            Some(injury) if injury.is_reported() => Some(OfferTier::Hybrid),
            _ => None,
        }
    }
}
