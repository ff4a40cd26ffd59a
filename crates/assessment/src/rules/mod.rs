//! Rule implementations for the routing cascade.
//!
//! One file per rule, listed here in the order the standard cascade
//! evaluates them. The order is a business rule: later rules are reachable
//! only when earlier ones do not match.

pub mod injury_override;
pub mod support_model;
pub mod travel_variability;
pub mod overwhelm_frequency;

// Re-export for convenience
pub use injury_override::InjuryOverrideRule;
pub use overwhelm_frequency::OverwhelmFrequencyRule;
pub use support_model::SupportModelRule;
pub use travel_variability::TravelVariabilityRule;
