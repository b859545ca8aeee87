use crate::error::{MealError, Result};
use crate::models::TargetProfile;
use crate::planner::constants::*;

/// Which Mifflin-St Jeor equation variant applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    /// Additive equation constant for this variant.
    #[inline]
    pub fn bmr_constant(&self) -> f64 {
        match self {
            Sex::Male => MSJ_MALE_CONSTANT,
            Sex::Female => MSJ_FEMALE_CONSTANT,
        }
    }

    /// Parse a user-supplied name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Sex> {
        match name.to_lowercase().as_str() {
            "male" | "m" => Some(Sex::Male),
            "female" | "f" => Some(Sex::Female),
            _ => None,
        }
    }
}

/// Named activity levels on the standard multiplier scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
    Extra,
}

impl ActivityLevel {
    /// TDEE multiplier for this level.
    pub fn factor(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => ACTIVITY_SEDENTARY,
            ActivityLevel::Light => ACTIVITY_LIGHT,
            ActivityLevel::Moderate => ACTIVITY_MODERATE,
            ActivityLevel::Active => ACTIVITY_ACTIVE,
            ActivityLevel::Extra => ACTIVITY_EXTRA,
        }
    }

    /// Parse a user-supplied name (case-insensitive).
    pub fn from_name(name: &str) -> Option<ActivityLevel> {
        match name.to_lowercase().as_str() {
            "sedentary" => Some(ActivityLevel::Sedentary),
            "light" => Some(ActivityLevel::Light),
            "moderate" => Some(ActivityLevel::Moderate),
            "active" => Some(ActivityLevel::Active),
            "extra" => Some(ActivityLevel::Extra),
            _ => None,
        }
    }
}

/// Configuration for deriving the daily target.
///
/// Defaults reproduce the values the web front-end assumed: male equation,
/// age 22, lightly active, energy split 50/25/25 across carbs/protein/fat.
#[derive(Debug, Clone)]
pub struct ProfileConfig {
    pub sex: Sex,
    pub age_years: u32,
    pub activity_factor: f64,
    pub carb_share: f64,
    pub protein_share: f64,
    pub fat_share: f64,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            sex: Sex::Male,
            age_years: DEFAULT_AGE_YEARS,
            activity_factor: DEFAULT_ACTIVITY_FACTOR,
            carb_share: CARB_ENERGY_SHARE,
            protein_share: PROTEIN_ENERGY_SHARE,
            fat_share: FAT_ENERGY_SHARE,
        }
    }
}

/// Basal metabolic rate by Mifflin-St Jeor, in kcal.
pub fn mifflin_st_jeor(height_cm: f64, weight_kg: f64, age_years: u32, sex: Sex) -> f64 {
    MSJ_WEIGHT_COEF * weight_kg
        + MSJ_HEIGHT_COEF * height_cm
        + MSJ_AGE_COEF * age_years as f64
        + sex.bmr_constant()
}

/// Derive the daily energy target and macro split from body metrics.
///
/// All rounding is round-half-away-from-zero. Macro targets are computed
/// from the already-rounded TDEE.
pub fn compute_target(
    height_cm: f64,
    weight_kg: f64,
    config: &ProfileConfig,
) -> Result<TargetProfile> {
    if !height_cm.is_finite() || height_cm <= 0.0 {
        return Err(MealError::InvalidInput(
            "Height must be a positive number".to_string(),
        ));
    }
    if !weight_kg.is_finite() || weight_kg <= 0.0 {
        return Err(MealError::InvalidInput(
            "Weight must be a positive number".to_string(),
        ));
    }
    if !config.activity_factor.is_finite() || config.activity_factor <= 0.0 {
        return Err(MealError::InvalidInput(
            "Activity factor must be positive".to_string(),
        ));
    }
    for share in [config.carb_share, config.protein_share, config.fat_share] {
        if !share.is_finite() || share < 0.0 {
            return Err(MealError::InvalidInput(
                "Macro shares must be non-negative".to_string(),
            ));
        }
    }

    let bmr = mifflin_st_jeor(height_cm, weight_kg, config.age_years, config.sex);
    let tdee = (bmr * config.activity_factor).round();
    if tdee < 1.0 {
        return Err(MealError::InvalidInput(
            "Body metrics produce no positive energy target".to_string(),
        ));
    }
    let tdee = tdee as u32;

    let carbs = (config.carb_share * tdee as f64 / KCAL_PER_GRAM_CARBS).round() as u32;
    let protein = (config.protein_share * tdee as f64 / KCAL_PER_GRAM_PROTEIN).round() as u32;
    let fat = (config.fat_share * tdee as f64 / KCAL_PER_GRAM_FAT).round() as u32;

    Ok(TargetProfile {
        calories: tdee,
        carbs,
        protein,
        fat,
    })
}
