//! # Nutrition Crate
//!
//! This crate implements the nutrition calculator: deterministic arithmetic
//! turning biometric and lifestyle inputs into daily calorie and macro
//! targets.
//!
//! ## Main Components
//!
//! - **profile**: Input types (BiometricProfile and its enums)
//! - **engine**: `compute_macros` and the MacroResult output types
//! - **constants**: Formula coefficients and program policy numbers
//!
//! ## Example Usage
//!
//! ```ignore
//! use nutrition::{compute_macros, ActivityLevel, BiometricProfile, Gender,
//!                 NutritionGoal, ProteinTier};
//!
//! let profile = BiometricProfile {
//!     gender: Gender::Male,
//!     age: 30,
//!     height_cm: 175.0,
//!     weight_kg: 80.0,
//!     target_weight_kg: 80.0,
//!     activity: ActivityLevel::LightlyActive,
//!     goal: NutritionGoal::Maintenance,
//!     protein_tier: ProteinTier::High,
//!     weekly_alcohol_drinks: 0,
//! };
//!
//! let targets = compute_macros(&profile).rounded();
//! println!("{} kcal, {} g protein", targets.total_calories, targets.protein_g);
//! ```
//!
//! ## Totality
//!
//! The engine never errors. Range checking belongs to the form layer; an
//! out-of-domain input (say, a negative weight) produces nonsensical but
//! non-crashing numbers, which is the accepted boundary here.

// Public modules
pub mod constants;
pub mod engine;
pub mod profile;

// Re-export commonly used types for convenience
pub use engine::{compute_macros, MacroResult, MacroShare, MacroTargets};
pub use profile::{ActivityLevel, BiometricProfile, Gender, NutritionGoal, ProteinTier};
