use std::collections::HashMap;

use crate::models::{MealSlot, MenuItem};

/// Per-slot pools of menu items for one recommendation request.
///
/// Partitioning preserves the input order within each pool; no
/// deduplication, no validation of macro values.
#[derive(Debug, Clone, Default)]
pub struct MenuCatalog {
    breakfast: Vec<MenuItem>,
    lunch: Vec<MenuItem>,
    dinner: Vec<MenuItem>,
}

impl MenuCatalog {
    /// Partition raw menu items into per-slot pools.
    pub fn from_items(items: Vec<MenuItem>) -> Self {
        let mut catalog = MenuCatalog::default();
        for item in items {
            match item.slot {
                MealSlot::Breakfast => catalog.breakfast.push(item),
                MealSlot::Lunch => catalog.lunch.push(item),
                MealSlot::Dinner => catalog.dinner.push(item),
            }
        }
        catalog
    }

    /// Pool for one serving window.
    pub fn pool(&self, slot: MealSlot) -> &[MenuItem] {
        match slot {
            MealSlot::Breakfast => &self.breakfast,
            MealSlot::Lunch => &self.lunch,
            MealSlot::Dinner => &self.dinner,
        }
    }

    /// Whether the pools every plan shape requires are populated.
    pub fn has_required_pools(&self) -> bool {
        !self.lunch.is_empty() && !self.dinner.is_empty()
    }

    /// Total number of items across all pools.
    pub fn len(&self) -> usize {
        self.breakfast.len() + self.lunch.len() + self.dinner.len()
    }

    /// Whether no pool has any item.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Menu item names of one cafeteria place, bucketed by serving window.
#[derive(Debug, Clone)]
pub struct PlaceMenu {
    pub place: String,
    pub breakfast: Vec<String>,
    pub lunch: Vec<String>,
    pub dinner: Vec<String>,
}

impl PlaceMenu {
    fn empty(place: String) -> Self {
        Self {
            place,
            breakfast: Vec::new(),
            lunch: Vec::new(),
            dinner: Vec::new(),
        }
    }
}

/// Group raw menu items by cafeteria place for browsing.
///
/// Places keep their first-appearance order; names keep catalog order
/// within each bucket.
pub fn group_by_place(items: &[MenuItem]) -> Vec<PlaceMenu> {
    let mut boards: Vec<PlaceMenu> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for item in items {
        let idx = *index.entry(item.place.clone()).or_insert_with(|| {
            boards.push(PlaceMenu::empty(item.place.clone()));
            boards.len() - 1
        });

        let board = &mut boards[idx];
        match item.slot {
            MealSlot::Breakfast => board.breakfast.push(item.name.clone()),
            MealSlot::Lunch => board.lunch.push(item.name.clone()),
            MealSlot::Dinner => board.dinner.push(item.name.clone()),
        }
    }

    boards
}
