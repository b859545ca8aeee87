use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::error::{MealError, Result};

/// Prompt for the user id plans are saved under.
pub fn prompt_user_id() -> Result<String> {
    let input: String = Input::new()
        .with_prompt("Your user id")
        .interact_text()?;

    let input = input.trim().to_string();
    if input.is_empty() {
        return Err(MealError::InvalidInput("User id is empty".to_string()));
    }
    Ok(input)
}

/// Prompt for height in centimeters.
pub fn prompt_height_cm() -> Result<f64> {
    let input: String = Input::new()
        .with_prompt("Your height in cm")
        .interact_text()?;

    input
        .trim()
        .parse()
        .map_err(|_| MealError::InvalidInput("Invalid number".to_string()))
}

/// Prompt for weight in kilograms.
pub fn prompt_weight_kg() -> Result<f64> {
    let input: String = Input::new()
        .with_prompt("Your weight in kg")
        .interact_text()?;

    input
        .trim()
        .parse()
        .map_err(|_| MealError::InvalidInput("Invalid number".to_string()))
}

/// Prompt for a memo line. May be empty.
pub fn prompt_memo() -> Result<String> {
    let input: String = Input::new()
        .with_prompt("Memo (empty to clear)")
        .allow_empty(true)
        .interact_text()?;

    Ok(input.trim().to_string())
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Pick one entry from a list, with a cancel row appended.
pub fn choose_from_list(prompt: &str, items: &[String]) -> Result<Option<usize>> {
    let mut options = items.to_vec();
    options.push("Cancel".to_string());

    let selection = Select::new()
        .with_prompt(prompt)
        .items(&options)
        .default(0)
        .interact()?;

    if selection < items.len() {
        Ok(Some(selection))
    } else {
        Ok(None)
    }
}

/// Resolve a place name against the known places with fuzzy matching.
pub fn choose_place(places: &[String], query: &str) -> Result<Option<String>> {
    let query = query.trim();

    // Try exact match first (case-insensitive)
    let exact_match = places
        .iter()
        .find(|p| p.to_lowercase() == query.to_lowercase());

    if let Some(place) = exact_match {
        return Ok(Some(place.clone()));
    }

    // Try fuzzy matching
    let mut candidates: Vec<(&String, f64)> = places
        .iter()
        .map(|p| (p, jaro_winkler(&p.to_lowercase(), &query.to_lowercase())))
        .filter(|(_, score)| *score > 0.7)
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    if candidates.is_empty() {
        println!("No matching place found for '{}'", query);
        return Ok(None);
    }

    if candidates.len() == 1 {
        let place = candidates[0].0;
        let confirm = Confirm::new()
            .with_prompt(format!("Did you mean '{}'?", place))
            .default(true)
            .interact()?;

        return Ok(confirm.then(|| place.clone()));
    }

    // Multiple matches - let user select
    let options: Vec<String> = candidates
        .iter()
        .take(5)
        .map(|(p, _)| (*p).clone())
        .collect();

    let mut selection_options = options.clone();
    selection_options.push("None of these".to_string());

    let selection = Select::new()
        .with_prompt("Which did you mean?")
        .items(&selection_options)
        .default(0)
        .interact()?;

    if selection < options.len() {
        Ok(Some(options[selection].clone()))
    } else {
        Ok(None)
    }
}

/// Collect user id and body metrics, prompting for whatever the command
/// line did not provide.
pub fn collect_user_metrics(
    user_id: Option<String>,
    height_cm: Option<f64>,
    weight_kg: Option<f64>,
) -> Result<(String, f64, f64)> {
    let user_id = match user_id {
        Some(id) => id,
        None => prompt_user_id()?,
    };
    let height_cm = match height_cm {
        Some(h) => h,
        None => prompt_height_cm()?,
    };
    let weight_kg = match weight_kg {
        Some(w) => w,
        None => prompt_weight_kg()?,
    };

    Ok((user_id, height_cm, weight_kg))
}
