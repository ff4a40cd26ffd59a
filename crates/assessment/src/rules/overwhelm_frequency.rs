//! Bias toward Online coaching for overwhelmed prospects with a workable
//! schedule.
//!
//! Someone who feels overwhelmed but can still train three or four times a
//! week mostly needs structure and a coach watching the plan, not in-person
//! supervision.

use crate::answers::{AssessmentAnswers, Constraint, Frequency, OfferTier};
use crate::traits::Rule;

/// Routes `Overwhelm` + moderate frequency (Three or Four) to `Online`.
pub struct OverwhelmFrequencyRule;

impl Rule for OverwhelmFrequencyRule {
    fn name(&self) -> &str {
        "OverwhelmFrequencyRule"
    }

    fn evaluate(&self, answers: &AssessmentAnswers) -> Option<OfferTier> {
        let overwhelmed = answers.constraint == Some(Constraint::Overwhelm);
        let moderate = matches!(
            answers.frequency,
            Some(Frequency::Three) | Some(Frequency::Four)
        );

        if overwhelmed && moderate {
            Some(OfferTier::Online)
        } else {
            None
        }
    }
}
