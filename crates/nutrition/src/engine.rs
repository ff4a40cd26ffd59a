//! The macro calculation engine.
//!
//! `compute_macros` turns a BiometricProfile into a calorie and macro
//! breakdown. It is a pure function: no I/O, no shared state, a fresh result
//! on every call, so the form layer can re-run it on every keystroke.
//!
//! ## Algorithm
//! 1. BMR via Mifflin-St Jeor
//! 2. TDEE = BMR x activity multiplier
//! 3. Target calories = TDEE (+300 for a gain goal)
//! 4. Protein from target weight and tier, 4 kcal/g
//! 5. Fat at a flat 20% of target calories
//! 6. Daily alcohol calories deducted from what remains
//! 7. Carbs get the remainder
//! 8. Clamps: carbs never go negative (fat absorbs the shortfall); if fat
//!    itself goes negative the result is flagged not achievable
//!
//! All arithmetic stays in f64; rounding happens only in
//! [`MacroResult::rounded`].

use crate::constants::{
    BMR_AGE_COEFF, BMR_HEIGHT_COEFF, BMR_WEIGHT_COEFF, DAYS_PER_WEEK, FAT_BUDGET_FRACTION,
    GAIN_SURPLUS_KCAL, KCAL_PER_DRINK, KCAL_PER_G_CARB, KCAL_PER_G_FAT, KCAL_PER_G_PROTEIN,
};
use crate::profile::{BiometricProfile, NutritionGoal};
use serde::{Deserialize, Serialize};

/// One macro's share of the day: grams and the calories they carry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroShare {
    pub grams: f64,
    pub calories: f64,
}

/// Full, unrounded engine output.
///
/// Never persisted; recomputed from the profile whenever an input changes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroResult {
    /// Basal metabolic rate, kcal/day.
    pub bmr: f64,
    /// Total daily energy expenditure, kcal/day.
    pub tdee: f64,
    /// Calorie target after the goal adjustment.
    pub total_calories: f64,
    pub protein: MacroShare,
    pub fat: MacroShare,
    pub carbs: MacroShare,
    /// Daily share of the weekly alcohol budget, kcal.
    pub daily_alcohol_calories: f64,
    /// False when protein plus alcohol exceed the whole calorie budget and
    /// fat had to be clamped at zero. The numbers are still reported, but
    /// the target cannot be hit as specified.
    pub achievable: bool,
}

/// Integer presentation form, produced at the display boundary only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroTargets {
    pub bmr: i64,
    pub tdee: i64,
    pub total_calories: i64,
    pub protein_g: i64,
    pub protein_calories: i64,
    pub fat_g: i64,
    pub fat_calories: i64,
    pub carb_g: i64,
    pub carb_calories: i64,
    pub daily_alcohol_calories: i64,
}

impl MacroResult {
    /// Round every value to the nearest integer for display.
    ///
    /// This is the only place rounding happens; every intermediate value
    /// that feeds a later step stays unrounded.
    pub fn rounded(&self) -> MacroTargets {
        MacroTargets {
            bmr: self.bmr.round() as i64,
            tdee: self.tdee.round() as i64,
            total_calories: self.total_calories.round() as i64,
            protein_g: self.protein.grams.round() as i64,
            protein_calories: self.protein.calories.round() as i64,
            fat_g: self.fat.grams.round() as i64,
            fat_calories: self.fat.calories.round() as i64,
            carb_g: self.carbs.grams.round() as i64,
            carb_calories: self.carbs.calories.round() as i64,
            daily_alcohol_calories: self.daily_alcohol_calories.round() as i64,
        }
    }
}

/// Compute the full calorie and macro breakdown for a profile.
pub fn compute_macros(profile: &BiometricProfile) -> MacroResult {
    // Mifflin-St Jeor resting expenditure.
    let bmr = BMR_WEIGHT_COEFF * profile.weight_kg
        + BMR_HEIGHT_COEFF * profile.height_cm
        - BMR_AGE_COEFF * f64::from(profile.age)
        + profile.gender.bmr_offset();
    let tdee = bmr * profile.activity.multiplier();

    // Only a gain goal moves the target off TDEE. Recomp deliberately stays
    // at maintenance and leans on the protein target instead.
    let total_calories = match profile.goal {
        NutritionGoal::Gain => tdee + GAIN_SURPLUS_KCAL,
        NutritionGoal::Maintenance | NutritionGoal::Recomp => tdee,
    };

    // Protein is sized for the target weight, not the current weight, and
    // is never reduced by anything downstream.
    let protein_grams = profile.target_weight_kg * profile.protein_tier.grams_per_kg();
    let protein_calories = protein_grams * KCAL_PER_G_PROTEIN;

    let mut fat_calories = total_calories * FAT_BUDGET_FRACTION;

    // Zero drinks must produce exactly 0.0, not a near-zero float.
    let daily_alcohol_calories = if profile.weekly_alcohol_drinks == 0 {
        0.0
    } else {
        f64::from(profile.weekly_alcohol_drinks) * KCAL_PER_DRINK / DAYS_PER_WEEK
    };

    // Alcohol comes out of the carb/fat side of the budget, never protein.
    let mut carb_calories =
        total_calories - protein_calories - fat_calories - daily_alcohol_calories;

    // Fat is the compressible macro: a carb shortfall reduces fat instead
    // of reporting negative carbs.
    if carb_calories < 0.0 {
        fat_calories += carb_calories;
        carb_calories = 0.0;
    }

    // Second-order clamp: with a low enough budget (high protein tier plus
    // heavy alcohol) the absorbed shortfall can push fat itself below zero.
    // Clamp it and say so instead of reporting negative grams.
    let mut achievable = true;
    if fat_calories < 0.0 {
        tracing::debug!(
            fat_calories,
            "protein and alcohol exceed the calorie budget, clamping fat to zero"
        );
        fat_calories = 0.0;
        achievable = false;
    }

    MacroResult {
        bmr,
        tdee,
        total_calories,
        protein: MacroShare {
            grams: protein_grams,
            calories: protein_calories,
        },
        fat: MacroShare {
            grams: fat_calories / KCAL_PER_G_FAT,
            calories: fat_calories,
        },
        carbs: MacroShare {
            grams: carb_calories / KCAL_PER_G_CARB,
            calories: carb_calories,
        },
        daily_alcohol_calories,
        achievable,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{ActivityLevel, Gender, ProteinTier};

    fn base_profile() -> BiometricProfile {
        BiometricProfile {
            gender: Gender::Male,
            age: 30,
            height_cm: 175.0,
            weight_kg: 80.0,
            target_weight_kg: 80.0,
            activity: ActivityLevel::LightlyActive,
            goal: NutritionGoal::Maintenance,
            protein_tier: ProteinTier::High,
            weekly_alcohol_drinks: 0,
        }
    }

    #[test]
    fn test_bmr_male() {
        let result = compute_macros(&base_profile());
        // 10*80 + 6.25*175 - 5*30 + 5
        assert_eq!(result.bmr, 1748.75);
    }

    #[test]
    fn test_bmr_female_offset() {
        let profile = BiometricProfile {
            gender: Gender::Female,
            ..base_profile()
        };
        let result = compute_macros(&profile);
        assert_eq!(result.bmr, 1748.75 - 166.0);
    }

    #[test]
    fn test_tdee_scales_bmr() {
        let result = compute_macros(&base_profile());
        assert_eq!(result.tdee, 1748.75 * 1.375);
    }

    #[test]
    fn test_protein_uses_target_weight() {
        let profile = BiometricProfile {
            weight_kg: 95.0,
            target_weight_kg: 80.0,
            ..base_profile()
        };
        let result = compute_macros(&profile);
        assert_eq!(result.protein.grams, 120.0);
        assert_eq!(result.protein.calories, 480.0);
    }

    #[test]
    fn test_zero_drinks_is_exactly_zero() {
        let result = compute_macros(&base_profile());
        assert_eq!(result.daily_alcohol_calories, 0.0);
    }

    #[test]
    fn test_no_intermediate_rounding() {
        let result = compute_macros(&base_profile());
        // tdee = 1748.75 * 1.375 = 2404.53125 feeds fat and carbs unrounded
        assert_eq!(result.fat.calories, 2404.53125 * 0.20);
        assert_eq!(
            result.carbs.calories,
            2404.53125 - 480.0 - 2404.53125 * 0.20
        );
    }
}
