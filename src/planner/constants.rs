// ─────────────────────────────────────────────────────────────────────────────
// Energy model (Mifflin-St Jeor)
// ─────────────────────────────────────────────────────────────────────────────

/// Weight coefficient, kcal per kg.
pub const MSJ_WEIGHT_COEF: f64 = 10.0;

/// Height coefficient, kcal per cm.
pub const MSJ_HEIGHT_COEF: f64 = 6.25;

/// Age coefficient, kcal per year (negative: BMR falls with age).
pub const MSJ_AGE_COEF: f64 = -5.0;

/// Additive constant for the male equation variant.
pub const MSJ_MALE_CONSTANT: f64 = 5.0;

/// Additive constant for the female equation variant.
pub const MSJ_FEMALE_CONSTANT: f64 = -161.0;

/// Age assumed when the caller does not supply one.
pub const DEFAULT_AGE_YEARS: u32 = 22;

// ─────────────────────────────────────────────────────────────────────────────
// Activity factors (TDEE = BMR x factor)
// ─────────────────────────────────────────────────────────────────────────────

/// Little or no exercise.
pub const ACTIVITY_SEDENTARY: f64 = 1.2;

/// Light exercise 1-3 days per week.
pub const ACTIVITY_LIGHT: f64 = 1.375;

/// Moderate exercise 3-5 days per week.
pub const ACTIVITY_MODERATE: f64 = 1.55;

/// Hard exercise 6-7 days per week.
pub const ACTIVITY_ACTIVE: f64 = 1.725;

/// Very hard exercise or a physical job.
pub const ACTIVITY_EXTRA: f64 = 1.9;

/// Factor assumed when the caller does not supply one.
pub const DEFAULT_ACTIVITY_FACTOR: f64 = ACTIVITY_LIGHT;

// ─────────────────────────────────────────────────────────────────────────────
// Macro split
// ─────────────────────────────────────────────────────────────────────────────

/// Share of the energy target assigned to carbohydrates.
pub const CARB_ENERGY_SHARE: f64 = 0.5;

/// Share of the energy target assigned to protein.
pub const PROTEIN_ENERGY_SHARE: f64 = 0.25;

/// Share of the energy target assigned to fat.
pub const FAT_ENERGY_SHARE: f64 = 0.25;

/// Energy density of carbohydrates, kcal per gram.
pub const KCAL_PER_GRAM_CARBS: f64 = 4.0;

/// Energy density of protein, kcal per gram.
pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;

/// Energy density of fat, kcal per gram.
pub const KCAL_PER_GRAM_FAT: f64 = 9.0;

// ─────────────────────────────────────────────────────────────────────────────
// Combination search
// ─────────────────────────────────────────────────────────────────────────────

/// Trial budget for the sampled search strategy.
pub const DEFAULT_TRIALS: usize = 1000;

/// Cross-product size up to which the auto strategy enumerates every
/// combination instead of sampling.
pub const EXHAUSTIVE_LIMIT: u64 = 100_000;
