//! Core trait for the routing rule cascade.
//!
//! This module defines the Rule trait that lets the routing policy be
//! expressed as an ordered list of independently testable rules.

use crate::answers::{AssessmentAnswers, OfferTier};

/// One rule in the routing cascade: a predicate paired with the tier it
/// recommends when the predicate matches.
///
/// ## Design Note
/// - `Send + Sync` allows rules to be evaluated from concurrent contexts
/// - Rules borrow the answers and never mutate them
/// - Returning `Option<OfferTier>` makes "no match" explicit: an unanswered
///   question fails the predicate rather than producing an error
pub trait Rule: Send + Sync {
    /// Returns the name of this rule (for logging/debugging)
    fn name(&self) -> &str;

    /// Evaluate this rule against an answer set.
    ///
    /// # Returns
    /// * `Some(tier)` - The rule matched and recommends this tier
    /// * `None` - The rule does not apply; the cascade moves on
    fn evaluate(&self, answers: &AssessmentAnswers) -> Option<OfferTier>;
}
