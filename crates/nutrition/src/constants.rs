//! Constants for the calorie and macro formulas.
//!
//! BMR coefficients are the Mifflin-St Jeor equation (Mifflin et al., 1990).
//! The remaining values are the coaching program's own policy numbers.

// === Mifflin-St Jeor coefficients ===

/// kcal per kg of body weight.
pub const BMR_WEIGHT_COEFF: f64 = 10.0;

/// kcal per cm of height.
pub const BMR_HEIGHT_COEFF: f64 = 6.25;

/// kcal per year of age (subtracted).
pub const BMR_AGE_COEFF: f64 = 5.0;

/// Additive offset for men.
pub const BMR_MALE_OFFSET: f64 = 5.0;

/// Additive offset for women.
pub const BMR_FEMALE_OFFSET: f64 = -161.0;

// === Macro energy densities (kcal per gram) ===

pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
pub const KCAL_PER_G_CARB: f64 = 4.0;
pub const KCAL_PER_G_FAT: f64 = 9.0;

// === Program policy ===

/// Flat surplus applied on top of TDEE for a gain goal.
pub const GAIN_SURPLUS_KCAL: f64 = 300.0;

/// Fat budget as a fraction of total target calories (of total, not of the
/// remainder after protein).
pub const FAT_BUDGET_FRACTION: f64 = 0.20;

/// Average kcal per alcoholic drink used for the weekly budget.
pub const KCAL_PER_DRINK: f64 = 130.0;

/// Weekly alcohol budget is spread evenly across the week.
pub const DAYS_PER_WEEK: f64 = 7.0;
