use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::menu::{MealSlot, MenuItem, NutritionTotals};

/// Daily energy target with its macro split, in kcal and grams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetProfile {
    /// Calorie target (TDEE).
    pub calories: u32,

    /// Carbohydrate target in grams.
    pub carbs: u32,

    /// Protein target in grams.
    pub protein: u32,

    /// Fat target in grams.
    pub fat: u32,
}

/// Slot assignments of one combination.
///
/// Lunch and dinner are always present; breakfast only in the three-meal
/// shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComboMeals {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breakfast: Option<MenuItem>,

    pub lunch: MenuItem,

    pub dinner: MenuItem,
}

impl ComboMeals {
    /// Slot/item pairs in serving order, skipping an absent breakfast.
    pub fn entries(&self) -> Vec<(MealSlot, &MenuItem)> {
        let mut entries = Vec::with_capacity(3);
        if let Some(b) = &self.breakfast {
            entries.push((MealSlot::Breakfast, b));
        }
        entries.push((MealSlot::Lunch, &self.lunch));
        entries.push((MealSlot::Dinner, &self.dinner));
        entries
    }
}

/// One selected combination of menu items with its nutrition totals.
///
/// Totals are fixed at construction as the sum over exactly the included
/// items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealCombo {
    #[serde(rename = "totalNutrition")]
    pub totals: NutritionTotals,

    pub meals: ComboMeals,
}

impl MealCombo {
    pub fn new(breakfast: Option<MenuItem>, lunch: MenuItem, dinner: MenuItem) -> Self {
        let totals = breakfast
            .iter()
            .chain([&lunch, &dinner])
            .map(|item| item.nutrition())
            .sum();

        Self {
            totals,
            meals: ComboMeals {
                breakfast,
                lunch,
                dinner,
            },
        }
    }

    /// Whether this combo covers all three serving windows.
    #[inline]
    pub fn is_three_meal(&self) -> bool {
        self.meals.breakfast.is_some()
    }
}

/// Full recommendation output for one request.
///
/// Serialized field names match the plan records already stored by the web
/// front-end, so both clients can read each other's history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Total daily energy expenditure in kcal.
    pub tdee: u32,

    pub targets: TargetProfile,

    /// Breakfast + lunch + dinner shape, when one was found.
    #[serde(rename = "plan3", default, skip_serializing_if = "Option::is_none")]
    pub three_meal: Option<MealCombo>,

    /// Lunch + dinner shape, when one was found.
    #[serde(rename = "plan2", default, skip_serializing_if = "Option::is_none")]
    pub two_meal: Option<MealCombo>,
}

/// One persisted recommendation in the plan-history backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanRecord {
    /// Record id, assigned by the backend on create.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    pub user_id: String,

    pub result: Recommendation,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,

    pub created_at: DateTime<Utc>,
}

impl PlanRecord {
    /// New unsaved record stamped with the current time.
    pub fn new(user_id: impl Into<String>, result: Recommendation) -> Self {
        Self {
            id: None,
            user_id: user_id.into(),
            result,
            memo: None,
            created_at: Utc::now(),
        }
    }
}
