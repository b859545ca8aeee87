pub mod menu;
pub mod plan;

pub use menu::{MealSlot, MenuItem, NutritionTotals};
pub use plan::{ComboMeals, MealCombo, PlanRecord, Recommendation, TargetProfile};
