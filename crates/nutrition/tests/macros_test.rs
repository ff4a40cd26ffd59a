//! Integration tests for the macro engine.
//!
//! These follow worked client examples end to end through the rounded
//! presentation values, plus the clamp behavior at the edges of the
//! calorie budget.

use nutrition::{
    compute_macros, ActivityLevel, BiometricProfile, Gender, NutritionGoal, ProteinTier,
};

/// 30-year-old male, 175 cm, 80 kg, training 1-3x/week.
fn reference_client() -> BiometricProfile {
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
fn test_reference_client_maintenance() {
    let targets = compute_macros(&reference_client()).rounded();

    // bmr = 10*80 + 6.25*175 - 5*30 + 5 = 1748.75
    assert_eq!(targets.bmr, 1749);
    // tdee = 1748.75 * 1.375 = 2404.53125
    assert_eq!(targets.tdee, 2405);
    assert_eq!(targets.total_calories, 2405);
    assert_eq!(targets.protein_g, 120);
    assert_eq!(targets.protein_calories, 480);
    // fat = 20% of 2404.53125 = 480.90625
    assert_eq!(targets.fat_calories, 481);
    assert_eq!(targets.fat_g, 53);
    // carbs = 2404.53125 - 480 - 480.90625 = 1443.625
    assert_eq!(targets.carb_calories, 1444);
    assert_eq!(targets.carb_g, 361);
    assert_eq!(targets.daily_alcohol_calories, 0);
}

#[test]
fn test_reference_client_gain_surplus() {
    let profile = BiometricProfile {
        goal: NutritionGoal::Gain,
        ..reference_client()
    };
    let result = compute_macros(&profile);
    let targets = result.rounded();

    // Flat +300 on top of unrounded TDEE.
    assert_eq!(result.total_calories, result.tdee + 300.0);
    assert_eq!(targets.total_calories, targets.tdee + 300);
    assert_eq!(targets.total_calories, 2705);

    // Protein is untouched by the goal.
    assert_eq!(targets.protein_g, 120);
    assert_eq!(targets.fat_calories, 541);
    assert_eq!(targets.carb_calories, 1684);
}

#[test]
fn test_recomp_stays_at_tdee() {
    let profile = BiometricProfile {
        goal: NutritionGoal::Recomp,
        ..reference_client()
    };
    let result = compute_macros(&profile);
    assert_eq!(result.total_calories, result.tdee);
}

#[test]
fn test_alcohol_comes_out_of_carbs() {
    let dry = compute_macros(&reference_client());
    let profile = BiometricProfile {
        weekly_alcohol_drinks: 7,
        ..reference_client()
    };
    let wet = compute_macros(&profile);

    // 7 drinks * 130 kcal / 7 days = exactly 130/day.
    assert_eq!(wet.daily_alcohol_calories, 130.0);
    assert_eq!(wet.carbs.calories, dry.carbs.calories - 130.0);

    // Protein and fat budgets are unaffected.
    assert_eq!(wet.protein, dry.protein);
    assert_eq!(wet.fat, dry.fat);
}

#[test]
fn test_protein_is_exactly_target_weight_times_tier() {
    for (tier, grams_per_kg) in [
        (ProteinTier::Moderate, 1.0),
        (ProteinTier::High, 1.5),
        (ProteinTier::Max, 2.0),
    ] {
        for goal in [
            NutritionGoal::Maintenance,
            NutritionGoal::Gain,
            NutritionGoal::Recomp,
        ] {
            for drinks in [0, 7, 15] {
                let profile = BiometricProfile {
                    target_weight_kg: 72.5,
                    protein_tier: tier,
                    goal,
                    weekly_alcohol_drinks: drinks,
                    ..reference_client()
                };
                let result = compute_macros(&profile);
                assert_eq!(result.protein.grams, 72.5 * grams_per_kg);
            }
        }
    }
}

/// A deliberately tight budget: small sedentary client, max protein tier
/// sized for a heavier target weight, maximum alcohol.
fn tight_budget_client(target_weight_kg: f64) -> BiometricProfile {
    BiometricProfile {
        gender: Gender::Female,
        age: 40,
        height_cm: 160.0,
        weight_kg: 60.0,
        target_weight_kg,
        activity: ActivityLevel::Sedentary,
        goal: NutritionGoal::Maintenance,
        protein_tier: ProteinTier::Max,
        weekly_alcohol_drinks: 15,
    }
}

#[test]
fn test_carb_shortfall_absorbed_by_fat() {
    let result = compute_macros(&tight_budget_client(120.0));

    // bmr = 600 + 1000 - 200 - 161 = 1239, tdee = 1486.8
    // protein 240 g = 960 kcal, fat budget 297.36, alcohol 278.57
    // leaves carbs at -49.13: clamped to zero, fat absorbs it.
    assert_eq!(result.carbs.calories, 0.0);
    assert_eq!(result.carbs.grams, 0.0);
    assert!(result.fat.calories > 0.0);
    assert!(result.achievable);

    // The budget still balances after the transfer.
    let spent = result.protein.calories
        + result.fat.calories
        + result.carbs.calories
        + result.daily_alcohol_calories;
    assert!((spent - result.total_calories).abs() < 1e-9);
}

#[test]
fn test_fat_clamped_and_flagged_when_budget_exhausted() {
    let result = compute_macros(&tight_budget_client(200.0));

    // Protein alone (1600 kcal) exceeds the whole 1486.8 kcal budget.
    assert_eq!(result.carbs.calories, 0.0);
    assert_eq!(result.fat.calories, 0.0);
    assert_eq!(result.fat.grams, 0.0);
    assert!(!result.achievable);

    // Protein is never reduced, even past the point of feasibility.
    assert_eq!(result.protein.grams, 400.0);
}

#[test]
fn test_carbs_never_negative_in_output() {
    for target in [60.0, 90.0, 120.0, 150.0, 200.0] {
        for drinks in [0, 5, 10, 15] {
            let profile = BiometricProfile {
                weekly_alcohol_drinks: drinks,
                ..tight_budget_client(target)
            };
            let result = compute_macros(&profile);
            assert!(result.carbs.calories >= 0.0);
            assert!(result.carbs.grams >= 0.0);
            assert!(result.fat.calories >= 0.0);
        }
    }
}

#[test]
fn test_engine_is_pure() {
    let profile = reference_client();
    let first = compute_macros(&profile);
    let second = compute_macros(&profile);
    assert_eq!(first, second);
}
