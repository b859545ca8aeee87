use meal_match_rs::error::MealError;
use meal_match_rs::models::{MealSlot, MenuItem};
use meal_match_rs::planner::{recommend, RecommendConfig, SearchStrategy};

fn item(place: &str, name: &str, slot: MealSlot, calories: u32) -> MenuItem {
    MenuItem {
        place: place.to_string(),
        name: name.to_string(),
        slot,
        calories,
        carbs: 20,
        protein: 10,
        fat: 5,
    }
}

fn sample_menu() -> Vec<MenuItem> {
    vec![
        item("Student Hall", "Toast Set", MealSlot::Breakfast, 400),
        item("Faculty Hall", "Porridge", MealSlot::Breakfast, 300),
        item("Student Hall", "Bibimbap", MealSlot::Lunch, 700),
        item("Faculty Hall", "Ramen", MealSlot::Lunch, 600),
        item("Garden Cafe", "Salad Bowl", MealSlot::Lunch, 350),
        item("Student Hall", "Bulgogi", MealSlot::Dinner, 800),
        item("Faculty Hall", "Curry Rice", MealSlot::Dinner, 750),
        item("Garden Cafe", "Vegetable Soup", MealSlot::Dinner, 400),
    ]
}

#[test]
fn test_recommend_picks_closest_combinations() {
    // Default profile at 170 cm / 65 kg targets 2210 kcal; the closest
    // 3-meal total is 1900 and the closest 2-meal total is 1500.
    let result = recommend(sample_menu(), 170.0, 65.0, &RecommendConfig::default()).unwrap();

    assert_eq!(result.tdee, 2210);
    assert_eq!(result.targets.protein, 138);

    let three = result.three_meal.expect("full menu should yield a 3-meal plan");
    assert_eq!(three.totals.calories, 1900, "Best 3-meal total");
    assert_eq!(
        three.meals.breakfast.as_ref().map(|i| i.name.as_str()),
        Some("Toast Set")
    );
    assert_eq!(three.meals.lunch.name, "Bibimbap");
    assert_eq!(three.meals.dinner.name, "Bulgogi");

    let two = result.two_meal.expect("full menu should yield a 2-meal plan");
    assert_eq!(two.totals.calories, 1500, "Best 2-meal total");
    assert!(two.meals.breakfast.is_none());
}

#[test]
fn test_menu_without_breakfast_still_yields_two_meal_plan() {
    let menu: Vec<MenuItem> = sample_menu()
        .into_iter()
        .filter(|i| i.slot != MealSlot::Breakfast)
        .collect();

    let result = recommend(menu, 170.0, 65.0, &RecommendConfig::default()).unwrap();

    assert!(
        result.three_meal.is_none(),
        "No 3-meal plan without breakfast items"
    );
    assert!(result.two_meal.is_some());
}

#[test]
fn test_empty_menu_reports_no_menu_data() {
    let err = recommend(Vec::new(), 170.0, 65.0, &RecommendConfig::default()).unwrap_err();
    assert!(matches!(err, MealError::NoMenuData));
}

#[test]
fn test_menu_without_dinner_reports_no_menu_data() {
    let menu: Vec<MenuItem> = sample_menu()
        .into_iter()
        .filter(|i| i.slot != MealSlot::Dinner)
        .collect();

    let err = recommend(menu, 170.0, 65.0, &RecommendConfig::default()).unwrap_err();
    assert!(matches!(err, MealError::NoMenuData));
}

#[test]
fn test_invalid_metrics_reported_before_menu_checks() {
    let err = recommend(Vec::new(), 0.0, 65.0, &RecommendConfig::default()).unwrap_err();
    assert!(
        matches!(err, MealError::InvalidInput(_)),
        "Bad metrics should win over the empty menu"
    );
}

#[test]
fn test_zero_trial_sampling_reports_no_combination() {
    let config = RecommendConfig {
        strategy: SearchStrategy::Sampled { trials: 0, seed: 5 },
        ..RecommendConfig::default()
    };

    let err = recommend(sample_menu(), 170.0, 65.0, &config).unwrap_err();
    assert!(matches!(err, MealError::NoCombinationFound));
}

#[test]
fn test_seeded_sampling_is_reproducible() {
    let config = RecommendConfig {
        strategy: SearchStrategy::Sampled {
            trials: 200,
            seed: 42,
        },
        ..RecommendConfig::default()
    };

    let first = recommend(sample_menu(), 170.0, 65.0, &config).unwrap();
    let second = recommend(sample_menu(), 170.0, 65.0, &config).unwrap();

    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap(),
        "Same seed should reproduce the same recommendation"
    );
}

#[test]
fn test_auto_matches_exhaustive_for_small_menu() {
    let auto = RecommendConfig {
        strategy: SearchStrategy::Auto { trials: 3, seed: 9 },
        ..RecommendConfig::default()
    };
    let exhaustive = RecommendConfig {
        strategy: SearchStrategy::Exhaustive,
        ..RecommendConfig::default()
    };

    let from_auto = recommend(sample_menu(), 170.0, 65.0, &auto).unwrap();
    let from_exhaustive = recommend(sample_menu(), 170.0, 65.0, &exhaustive).unwrap();

    assert_eq!(
        from_auto, from_exhaustive,
        "Small menus should fall through to the exhaustive search"
    );
}

#[test]
fn test_result_serializes_in_stored_plan_shape() {
    let result = recommend(sample_menu(), 170.0, 65.0, &RecommendConfig::default()).unwrap();
    let value = serde_json::to_value(&result).unwrap();

    assert_eq!(value["tdee"], 2210);
    assert_eq!(value["targets"]["carbs"], 276);
    assert_eq!(value["plan3"]["totalNutrition"]["calories"], 1900);
    assert_eq!(value["plan3"]["meals"]["breakfast"]["type"], "breakfast");
    assert_eq!(value["plan2"]["meals"]["lunch"]["name"], "Bibimbap");
}
