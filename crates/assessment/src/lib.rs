//! # Assessment Crate
//!
//! This crate implements the assessment router: the decision logic that maps
//! a prospect's questionnaire answers to one of the three coaching offers.
//!
//! ## Main Components
//!
//! - **answers**: Questionnaire domain types (AssessmentAnswers, OfferTier)
//! - **traits**: The Rule trait for composable routing rules
//! - **rules**: Concrete rule implementations, one per file
//! - **cascade**: RuleCascade orchestration and the `route` entry point
//!
//! ## Example Usage
//!
//! ```ignore
//! use assessment::{route, AssessmentAnswers, Injury, OfferTier, Support};
//!
//! let answers = AssessmentAnswers {
//!     injury: Some(Injury::None),
//!     support: Some(Support::Coached),
//!     ..Default::default()
//! };
//!
//! assert_eq!(route(&answers), OfferTier::Hybrid);
//! ```
//!
//! ## Routing Policy
//!
//! The cascade evaluates rules in strict order, first match wins:
//!
//! 1. Reported injury always routes to `Hybrid`
//! 2. `Coached` routes to `Hybrid`, `Accountable` to `Online`
//! 3. Travel constraint or varying frequency routes to `Online`
//! 4. Overwhelm plus three or four sessions a week routes to `Online`
//! 5. Everything else (including `Execute`) falls back to `Reset`
//!
//! The function is total: partially answered questionnaires simply fall
//! through the rules they cannot match.

// Public modules
pub mod answers;
pub mod cascade;
pub mod rules;
pub mod traits;

// Re-export commonly used types for convenience
pub use answers::{
    AssessmentAnswers,
    Constraint,
    Environment,
    Frequency,
    Goal,
    Injury,
    OfferTier,
    ParseAnswerError,
    Support,
};
pub use cascade::{route, RuleCascade};
pub use traits::Rule;
