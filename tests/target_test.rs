use assert_float_eq::assert_float_absolute_eq;

use meal_match_rs::error::MealError;
use meal_match_rs::planner::{compute_target, mifflin_st_jeor, ProfileConfig, Sex};

#[test]
fn test_bmr_reference_value() {
    // 10*65 + 6.25*170 - 5*22 + 5 = 1607.5
    let bmr = mifflin_st_jeor(170.0, 65.0, 22, Sex::Male);
    assert_float_absolute_eq!(bmr, 1607.5, 1e-9);
}

#[test]
fn test_reference_target_for_default_profile() {
    let target = compute_target(170.0, 65.0, &ProfileConfig::default()).unwrap();

    assert_eq!(target.calories, 2210, "TDEE mismatch");
    assert_eq!(target.carbs, 276, "Carb grams mismatch");
    assert_eq!(target.protein, 138, "Protein grams mismatch");
    assert_eq!(target.fat, 61, "Fat grams mismatch");
}

#[test]
fn test_female_constant_lowers_bmr_by_166() {
    let male = mifflin_st_jeor(170.0, 65.0, 22, Sex::Male);
    let female = mifflin_st_jeor(170.0, 65.0, 22, Sex::Female);

    assert_float_absolute_eq!(male - female, 166.0, 1e-9);
}

#[test]
fn test_tdee_rounds_half_away_from_zero() {
    // 10*142.25 + 6.25*160 - 5*21 + 5 = 2322.5, exact in f64.
    // Banker's rounding would give 2322.
    let bmr = mifflin_st_jeor(160.0, 142.25, 21, Sex::Male);
    assert_float_absolute_eq!(bmr, 2322.5, 1e-9);

    let config = ProfileConfig {
        age_years: 21,
        activity_factor: 1.0,
        ..ProfileConfig::default()
    };
    let target = compute_target(160.0, 142.25, &config).unwrap();

    assert_eq!(target.calories, 2323, "Half-calorie TDEE should round up");
}

#[test]
fn test_macro_grams_round_half_up() {
    // BMR = 105 + 1000 - 110 + 5 = 1000, so protein = 1000*0.25/4 = 62.5
    let config = ProfileConfig {
        activity_factor: 1.0,
        ..ProfileConfig::default()
    };
    let target = compute_target(160.0, 10.5, &config).unwrap();

    assert_eq!(target.calories, 1000);
    assert_eq!(target.carbs, 125);
    assert_eq!(target.protein, 63, "62.5 g should round up");
    assert_eq!(target.fat, 28, "27.8 g should round to 28");
}

#[test]
fn test_rejects_nonpositive_metrics() {
    let config = ProfileConfig::default();

    let zero_height = compute_target(0.0, 65.0, &config);
    assert!(
        matches!(zero_height, Err(MealError::InvalidInput(_))),
        "Zero height should be rejected"
    );

    let negative_weight = compute_target(170.0, -1.0, &config);
    assert!(
        matches!(negative_weight, Err(MealError::InvalidInput(_))),
        "Negative weight should be rejected"
    );
}

#[test]
fn test_higher_activity_raises_target() {
    let light = compute_target(170.0, 65.0, &ProfileConfig::default()).unwrap();

    let moderate_config = ProfileConfig {
        activity_factor: 1.55,
        ..ProfileConfig::default()
    };
    let moderate = compute_target(170.0, 65.0, &moderate_config).unwrap();

    assert!(
        moderate.calories > light.calories,
        "More activity should raise the target: {} vs {}",
        moderate.calories,
        light.calories
    );
}
