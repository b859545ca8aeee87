use crate::models::{MealCombo, PlanRecord, Recommendation};
use crate::planner::PlaceMenu;

/// Display a full recommendation: target line plus both plan shapes.
pub fn display_recommendation(result: &Recommendation) {
    println!();
    println!("=== Recommended Plans ===");
    println!();
    println!(
        "Daily target: {} kcal (carbs {} g, protein {} g, fat {} g)",
        result.targets.calories, result.targets.carbs, result.targets.protein, result.targets.fat
    );

    match &result.three_meal {
        Some(combo) => display_combo("3 meals", combo, result.targets.calories),
        None => {
            println!();
            println!("--- 3 meals ---");
            println!("  No combination (no breakfast items in the menu).");
        }
    }

    match &result.two_meal {
        Some(combo) => display_combo("2 meals", combo, result.targets.calories),
        None => {
            println!();
            println!("--- 2 meals ---");
            println!("  No combination found.");
        }
    }

    println!();
}

fn display_combo(title: &str, combo: &MealCombo, target_calories: u32) {
    println!();
    println!("--- {} ---", title);

    let entries = combo.meals.entries();

    // Find max item name length for alignment
    let max_name_len = entries.iter().map(|(_, i)| i.name.len()).max().unwrap_or(10);

    for (slot, item) in &entries {
        println!(
            "  {:<9} {:<width$}  {:>4} kcal | C {:>3} P {:>3} F {:>3}  @ {}",
            slot.label(),
            item.name,
            item.calories,
            item.carbs,
            item.protein,
            item.fat,
            item.place,
            width = max_name_len
        );
    }

    let gap = target_calories as i64 - combo.totals.calories as i64;
    let gap_str = match gap {
        0 => "on target".to_string(),
        g if g > 0 => format!("{} kcal under target", g),
        g => format!("{} kcal over target", -g),
    };

    println!(
        "  Total: {} kcal (carbs {} g, protein {} g, fat {} g), {}",
        combo.totals.calories, combo.totals.carbs, combo.totals.protein, combo.totals.fat, gap_str
    );
}

/// Display the menu of every place, grouped by serving window.
pub fn display_menu_boards(boards: &[PlaceMenu]) {
    if boards.is_empty() {
        println!("No menu data.");
        return;
    }

    for board in boards {
        display_menu_board(board);
    }
    println!();
}

/// Display one place's menu.
pub fn display_menu_board(board: &PlaceMenu) {
    println!();
    println!("=== {} ===", board.place);
    display_slot_line("breakfast", &board.breakfast);
    display_slot_line("lunch", &board.lunch);
    display_slot_line("dinner", &board.dinner);
}

fn display_slot_line(label: &str, names: &[String]) {
    if names.is_empty() {
        println!("  {:<9} (none)", label);
    } else {
        println!("  {:<9} {}", label, names.join(", "));
    }
}

/// Display a user's saved plans, newest first.
pub fn display_history(plans: &[PlanRecord]) {
    if plans.is_empty() {
        println!("No saved plans.");
        return;
    }

    println!();
    println!("=== Saved Plans ({}) ===", plans.len());
    println!();

    for (i, plan) in plans.iter().enumerate() {
        println!("{:>3}. {}", i + 1, history_line(plan));
    }
    println!();
}

/// One-line summary of a saved plan, used for lists and pickers.
pub fn history_line(plan: &PlanRecord) -> String {
    let date = plan.created_at.format("%Y-%m-%d %H:%M");

    let combo = plan
        .result
        .three_meal
        .as_ref()
        .or(plan.result.two_meal.as_ref());
    let meals = combo
        .map(|c| {
            c.meals
                .entries()
                .iter()
                .map(|(_, item)| item.name.as_str())
                .collect::<Vec<_>>()
                .join(" + ")
        })
        .unwrap_or_else(|| "-".to_string());

    let memo = plan
        .memo
        .as_deref()
        .map(|m| format!("  # {}", m))
        .unwrap_or_default();

    format!(
        "{}  target {} kcal  {}{}",
        date, plan.result.tdee, meals, memo
    )
}
