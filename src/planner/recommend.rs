use crate::error::{MealError, Result};
use crate::models::{MenuItem, Recommendation, TargetProfile};
use crate::planner::catalog::MenuCatalog;
use crate::planner::profile::{compute_target, ProfileConfig};
use crate::planner::selector::{select_combos, ComboSelection, SearchStrategy};

/// Engine configuration for one recommendation request.
#[derive(Debug, Clone, Default)]
pub struct RecommendConfig {
    pub profile: ProfileConfig,
    pub strategy: SearchStrategy,
}

/// Package the target and selected combinations into the final result.
///
/// Pure assembly; totals stay exactly as the selector produced them.
pub fn assemble(targets: TargetProfile, selection: ComboSelection) -> Recommendation {
    Recommendation {
        tdee: targets.calories,
        targets,
        three_meal: selection.three_meal,
        two_meal: selection.two_meal,
    }
}

/// Recommend daily meal plans for the given body metrics.
///
/// The full engine pass: derive the target, partition the catalog, search
/// for the calorie-closest combinations per plan shape, assemble the
/// result. Fails with `InvalidInput` before touching the catalog,
/// `NoMenuData` when the lunch or dinner pool is empty, and
/// `NoCombinationFound` when the search produced neither shape.
pub fn recommend(
    items: Vec<MenuItem>,
    height_cm: f64,
    weight_kg: f64,
    config: &RecommendConfig,
) -> Result<Recommendation> {
    let targets = compute_target(height_cm, weight_kg, &config.profile)?;

    let catalog = MenuCatalog::from_items(items);
    if !catalog.has_required_pools() {
        return Err(MealError::NoMenuData);
    }

    let selection = select_combos(&catalog, targets.calories, config.strategy);
    if selection.is_empty() {
        return Err(MealError::NoCombinationFound);
    }

    Ok(assemble(targets, selection))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MealSlot;

    fn item(name: &str, slot: MealSlot, calories: u32) -> MenuItem {
        MenuItem {
            place: "Student Hall".to_string(),
            name: name.to_string(),
            slot,
            calories,
            carbs: 50,
            protein: 20,
            fat: 10,
        }
    }

    #[test]
    fn test_invalid_metrics_win_over_missing_menu() {
        let err = recommend(Vec::new(), 0.0, 65.0, &RecommendConfig::default()).unwrap_err();
        assert!(matches!(err, MealError::InvalidInput(_)));
    }

    #[test]
    fn test_empty_catalog_is_no_menu_data() {
        let err = recommend(Vec::new(), 170.0, 65.0, &RecommendConfig::default()).unwrap_err();
        assert!(matches!(err, MealError::NoMenuData));
    }

    #[test]
    fn test_missing_dinner_pool_is_no_menu_data() {
        let items = vec![
            item("Toast Set", MealSlot::Breakfast, 400),
            item("Bibimbap", MealSlot::Lunch, 700),
        ];
        let err = recommend(items, 170.0, 65.0, &RecommendConfig::default()).unwrap_err();
        assert!(matches!(err, MealError::NoMenuData));
    }

    #[test]
    fn test_zero_trials_is_no_combination_found() {
        let items = vec![
            item("Bibimbap", MealSlot::Lunch, 700),
            item("Bulgogi", MealSlot::Dinner, 800),
        ];
        let config = RecommendConfig {
            strategy: SearchStrategy::Sampled { trials: 0, seed: 1 },
            ..RecommendConfig::default()
        };
        let err = recommend(items, 170.0, 65.0, &config).unwrap_err();
        assert!(matches!(err, MealError::NoCombinationFound));
    }

    #[test]
    fn test_assemble_carries_everything_through() {
        let items = vec![
            item("Toast Set", MealSlot::Breakfast, 400),
            item("Bibimbap", MealSlot::Lunch, 700),
            item("Bulgogi", MealSlot::Dinner, 800),
        ];
        let result = recommend(items, 170.0, 65.0, &RecommendConfig::default()).unwrap();

        assert_eq!(result.tdee, 2210);
        assert_eq!(result.targets.calories, 2210);
        let three = result.three_meal.unwrap();
        assert_eq!(three.totals.calories, 1900);
        let two = result.two_meal.unwrap();
        assert_eq!(two.totals.calories, 1500);
    }
}
