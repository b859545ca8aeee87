use std::iter::Sum;
use std::ops::Add;

use serde::{Deserialize, Serialize};

/// Serving window a menu item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
}

impl MealSlot {
    /// Lowercase name as it appears on the wire and in output.
    pub fn label(&self) -> &'static str {
        match self {
            MealSlot::Breakfast => "breakfast",
            MealSlot::Lunch => "lunch",
            MealSlot::Dinner => "dinner",
        }
    }
}

/// A single cafeteria menu item with its nutrition facts.
///
/// The field layout matches the menu endpoint's JSON records, where the
/// serving window is published under the `type` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub place: String,

    pub name: String,

    #[serde(rename = "type")]
    pub slot: MealSlot,

    pub calories: u32,

    pub carbs: u32,

    pub protein: u32,

    pub fat: u32,
}

impl MenuItem {
    /// Nutrition of this single item as a totals record.
    #[inline]
    pub fn nutrition(&self) -> NutritionTotals {
        NutritionTotals {
            calories: self.calories,
            carbs: self.carbs,
            protein: self.protein,
            fat: self.fat,
        }
    }
}

/// Calorie and macro sums over a set of menu items.
///
/// Stored inside a plan record under the `totalNutrition` key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NutritionTotals {
    pub calories: u32,

    pub carbs: u32,

    pub protein: u32,

    pub fat: u32,
}

impl Add for NutritionTotals {
    type Output = NutritionTotals;

    // Saturating: a catalog with absurd values must not wrap the totals.
    fn add(self, other: NutritionTotals) -> NutritionTotals {
        NutritionTotals {
            calories: self.calories.saturating_add(other.calories),
            carbs: self.carbs.saturating_add(other.carbs),
            protein: self.protein.saturating_add(other.protein),
            fat: self.fat.saturating_add(other.fat),
        }
    }
}

impl Sum for NutritionTotals {
    fn sum<I: Iterator<Item = NutritionTotals>>(iter: I) -> NutritionTotals {
        iter.fold(NutritionTotals::default(), Add::add)
    }
}
