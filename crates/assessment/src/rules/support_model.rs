//! Mapping from the prospect's stated support preference.
//!
//! Runs after the injury override. `Coached` and `Accountable` map directly
//! to a tier; `Execute` deliberately does not match here, so it can still be
//! upgraded by the travel and overwhelm rules before settling on the
//! self-guided default.

use crate::answers::{AssessmentAnswers, OfferTier, Support};
use crate::traits::Rule;

/// Maps `Coached` to `Hybrid` and `Accountable` to `Online`.
pub struct SupportModelRule;

impl Rule for SupportModelRule {
    fn name(&self) -> &str {
        "SupportModelRule"
    }

    fn evaluate(&self, answers: &AssessmentAnswers) -> Option<OfferTier> {
        match answers.support {
            Some(Support::Coached) => Some(OfferTier::Hybrid),
            Some(Support::Accountable) => Some(OfferTier::Online),
            Some(Support::Execute) | None => None,
        }
    }
}
