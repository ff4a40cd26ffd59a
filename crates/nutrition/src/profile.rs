//! Input types for the nutrition calculator.
//!
//! A BiometricProfile is built from a form one field at a time and handed to
//! the engine on every change. Range checking (negative weight, absurd age)
//! belongs to the form layer; the engine stays total and simply computes.

use crate::constants::{BMR_FEMALE_OFFSET, BMR_MALE_OFFSET};
use serde::{Deserialize, Serialize};

/// Biological sex as used by the Mifflin-St Jeor equation, which carries a
/// binary additive offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// The additive BMR offset for this gender.
    pub fn bmr_offset(self) -> f64 {
        match self {
            Gender::Male => BMR_MALE_OFFSET,
            Gender::Female => BMR_FEMALE_OFFSET,
        }
    }
}

/// Activity level scaling BMR up to TDEE.
///
/// The five levels map to the standard fixed multipliers; the form exposes
/// the multiplier itself, so `from_factor` parses it back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivityLevel {
    /// Little or no exercise (1.2)
    Sedentary,
    /// 1-3 sessions/week (1.375)
    LightlyActive,
    /// 3-5 sessions/week (1.55)
    ModeratelyActive,
    /// 6-7 sessions/week (1.725)
    VeryActive,
    /// Hard daily training or physical job (1.9)
    ExtraActive,
}

impl ActivityLevel {
    /// The TDEE multiplier for this level.
    pub fn multiplier(self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::LightlyActive => 1.375,
            ActivityLevel::ModeratelyActive => 1.55,
            ActivityLevel::VeryActive => 1.725,
            ActivityLevel::ExtraActive => 1.9,
        }
    }

    /// Parse a level back from its multiplier, tolerating float noise.
    pub fn from_factor(factor: f64) -> Option<Self> {
        const LEVELS: [ActivityLevel; 5] = [
            ActivityLevel::Sedentary,
            ActivityLevel::LightlyActive,
            ActivityLevel::ModeratelyActive,
            ActivityLevel::VeryActive,
            ActivityLevel::ExtraActive,
        ];
        LEVELS
            .into_iter()
            .find(|level| (level.multiplier() - factor).abs() < 1e-6)
    }
}

/// What the calorie target is aiming for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NutritionGoal {
    /// Hold at TDEE.
    Maintenance,
    /// TDEE plus a flat surplus.
    Gain,
    /// Hold at TDEE; recomposition leans on the protein/activity split
    /// rather than a surplus or deficit.
    Recomp,
}

/// How aggressively protein is prioritized, in grams per kg of target
/// weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProteinTier {
    /// 1.0 g/kg
    Moderate,
    /// 1.5 g/kg
    High,
    /// 2.0 g/kg
    Max,
}

impl ProteinTier {
    pub fn grams_per_kg(self) -> f64 {
        match self {
            ProteinTier::Moderate => 1.0,
            ProteinTier::High => 1.5,
            ProteinTier::Max => 2.0,
        }
    }

    /// Parse a tier back from its g/kg value, tolerating float noise.
    pub fn from_grams_per_kg(value: f64) -> Option<Self> {
        const TIERS: [ProteinTier; 3] =
            [ProteinTier::Moderate, ProteinTier::High, ProteinTier::Max];
        TIERS
            .into_iter()
            .find(|tier| (tier.grams_per_kg() - value).abs() < 1e-6)
    }
}

/// Everything the macro engine needs about one client.
///
/// `target_weight_kg` may differ from `weight_kg`: BMR uses the current
/// weight, protein uses the target, so a client cutting toward a lower
/// weight gets protein sized for where they are going.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BiometricProfile {
    pub gender: Gender,
    /// Age in whole years.
    pub age: u32,
    pub height_cm: f64,
    /// Current body weight, drives BMR.
    pub weight_kg: f64,
    /// Goal body weight, drives the protein target only.
    pub target_weight_kg: f64,
    pub activity: ActivityLevel,
    pub goal: NutritionGoal,
    pub protein_tier: ProteinTier,
    /// 0-15 drinks per week, spread evenly across days.
    pub weekly_alcohol_drinks: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_offsets() {
        assert_eq!(Gender::Male.bmr_offset(), 5.0);
        assert_eq!(Gender::Female.bmr_offset(), -161.0);
    }

    #[test]
    fn test_activity_from_factor() {
        assert_eq!(
            ActivityLevel::from_factor(1.375),
            Some(ActivityLevel::LightlyActive)
        );
        assert_eq!(
            ActivityLevel::from_factor(1.9),
            Some(ActivityLevel::ExtraActive)
        );
        assert_eq!(ActivityLevel::from_factor(1.5), None);
    }

    #[test]
    fn test_protein_tier_from_grams() {
        assert_eq!(
            ProteinTier::from_grams_per_kg(1.5),
            Some(ProteinTier::High)
        );
        assert_eq!(ProteinTier::from_grams_per_kg(0.8), None);
    }

    #[test]
    fn test_profile_serde_round_trip() {
        let profile = BiometricProfile {
            gender: Gender::Female,
            age: 41,
            height_cm: 168.0,
            weight_kg: 64.5,
            target_weight_kg: 60.0,
            activity: ActivityLevel::ModeratelyActive,
            goal: NutritionGoal::Recomp,
            protein_tier: ProteinTier::Max,
            weekly_alcohol_drinks: 2,
        };

        let json = serde_json::to_string(&profile).unwrap();
        let back: BiometricProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(back, profile);
    }
}
