//! Core domain types for the coaching assessment questionnaire.
//!
//! This module defines the six answer categories a prospect works through
//! and the offer tier the router produces from them.
//!
//! Key Rust concepts demonstrated here:
//! - Enums for closed sets of categorical answers
//! - `Option<T>` for questions that have not been answered yet
//! - Derive macros for common traits

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Answer Enums
// =============================================================================
// Each question on the assessment has a fixed set of answers. Modeling them
// as enums means an impossible answer cannot be constructed at all.

/// What the prospect wants out of training.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Goal {
    Strength,
    Physique,
    FatLoss,
    PainFree,
    Restarting,
}

/// The biggest obstacle standing in the way right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Constraint {
    Time,
    Stress,
    Travel,
    Pain,
    Overwhelm,
}

/// How many sessions per week the prospect can realistically commit to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Frequency {
    Two,
    Three,
    Four,
    FivePlus,
    /// Schedule changes week to week (shift work, frequent travel).
    Varies,
}

/// Where training will mostly happen.
///
/// No routing rule currently reads this answer; it is collected for the
/// coach's intake notes and kept here so the questionnaire stays complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Environment {
    Gym,
    Home,
    Hotel,
    Mixed,
}

/// Current or recurring injury the prospect reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Injury {
    None,
    Shoulder,
    Back,
    Knee,
    Other,
}

impl Injury {
    /// True when the prospect reported an actual injury (anything but `None`).
    pub fn is_reported(self) -> bool {
        self != Injury::None
    }
}

/// How much support the prospect says they want.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Support {
    /// "Give me the plan, I'll execute it myself."
    Execute,
    /// "I want someone checking in on me."
    Accountable,
    /// "I want hands-on coaching."
    Coached,
}

// =============================================================================
// Offer Tier
// =============================================================================

/// The three coaching products the router can recommend.
///
/// Ordered from lowest-touch to highest-touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OfferTier {
    /// Self-guided reset program.
    Reset,
    /// Online coaching with weekly check-ins.
    Online,
    /// Hybrid coaching with in-person technique supervision.
    Hybrid,
}

impl fmt::Display for OfferTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OfferTier::Reset => write!(f, "Reset"),
            OfferTier::Online => write!(f, "Online"),
            OfferTier::Hybrid => write!(f, "Hybrid"),
        }
    }
}

// =============================================================================
// AssessmentAnswers
// =============================================================================

/// One prospect's answers to the assessment questionnaire.
///
/// Every field starts unset (`None`) and is filled one at a time as the
/// prospect answers. The router takes this by shared reference and never
/// mutates it; an incomplete answer set is valid input (unanswered questions
/// simply fail every rule test).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentAnswers {
    pub goal: Option<Goal>,
    pub constraint: Option<Constraint>,
    pub frequency: Option<Frequency>,
    pub environment: Option<Environment>,
    pub injury: Option<Injury>,
    pub support: Option<Support>,
}

impl AssessmentAnswers {
    /// Create an answer set with every question unanswered.
    pub fn new() -> Self {
        Self::default()
    }

    /// True once all six questions have an answer.
    pub fn is_complete(&self) -> bool {
        self.goal.is_some()
            && self.constraint.is_some()
            && self.frequency.is_some()
            && self.environment.is_some()
            && self.injury.is_some()
            && self.support.is_some()
    }
}

// =============================================================================
// FromStr impls
// =============================================================================
// The answers arrive from outside the crate as strings (form values, CLI
// flags), so each enum parses from its kebab-case form name.

/// Shared parse error for all answer enums.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseAnswerError {
    pub question: &'static str,
    pub value: String,
}

impl fmt::Display for ParseAnswerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognized {} answer: {}", self.question, self.value)
    }
}

impl std::error::Error for ParseAnswerError {}

macro_rules! impl_answer_from_str {
    ($ty:ident, $question:literal, { $($text:literal => $variant:ident),+ $(,)? }) => {
        impl FromStr for $ty {
            type Err = ParseAnswerError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.to_ascii_lowercase().as_str() {
                    $($text => Ok($ty::$variant),)+
                    _ => Err(ParseAnswerError {
                        question: $question,
                        value: s.to_string(),
                    }),
                }
            }
        }
    };
}

impl_answer_from_str!(Goal, "goal", {
    "strength" => Strength,
    "physique" => Physique,
    "fat-loss" => FatLoss,
    "pain-free" => PainFree,
    "restarting" => Restarting,
});

impl_answer_from_str!(Constraint, "constraint", {
    "time" => Time,
    "stress" => Stress,
    "travel" => Travel,
    "pain" => Pain,
    "overwhelm" => Overwhelm,
});

impl_answer_from_str!(Frequency, "frequency", {
    "two" => Two,
    "three" => Three,
    "four" => Four,
    "five-plus" => FivePlus,
    "varies" => Varies,
});

impl_answer_from_str!(Environment, "environment", {
    "gym" => Gym,
    "home" => Home,
    "hotel" => Hotel,
    "mixed" => Mixed,
});

impl_answer_from_str!(Injury, "injury", {
    "none" => None,
    "shoulder" => Shoulder,
    "back" => Back,
    "knee" => Knee,
    "other" => Other,
});

impl_answer_from_str!(Support, "support", {
    "execute" => Execute,
    "accountable" => Accountable,
    "coached" => Coached,
});
