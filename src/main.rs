use clap::Parser;
use std::path::PathBuf;

use meal_match_rs::cli::{Cli, Command};
use meal_match_rs::error::{MealError, Result};
use meal_match_rs::interface::{
    choose_from_list, choose_place, collect_user_metrics, display_history, display_menu_board,
    display_menu_boards, display_recommendation, history_line, prompt_memo, prompt_user_id,
    prompt_yes_no,
};
use meal_match_rs::models::MenuItem;
use meal_match_rs::planner::{
    group_by_place, recommend, ActivityLevel, ProfileConfig, RecommendConfig, SearchStrategy, Sex,
};
use meal_match_rs::store::{load_menu_file, save_menu, MenuApi, PlanApi};

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let mut cli = Cli::parse();
    let command = cli.command.take().unwrap_or_default();

    match command {
        Command::Recommend {
            user_id,
            height,
            weight,
            sex,
            age,
            activity,
            search,
            trials,
            seed,
        } => {
            let profile = build_profile(&sex, age, &activity)?;
            let strategy = build_strategy(&search, trials, seed)?;
            cmd_recommend(&cli, user_id, height, weight, profile, strategy)
        }
        Command::Menu { place, save } => cmd_menu(&cli, place, save),
        Command::History { user_id } => cmd_history(&cli, user_id),
    }
}

/// Compute the daily target and recommend meal combinations.
fn cmd_recommend(
    cli: &Cli,
    user_id: Option<String>,
    height: Option<f64>,
    weight: Option<f64>,
    profile: ProfileConfig,
    strategy: SearchStrategy,
) -> Result<()> {
    let (user_id, height_cm, weight_kg) = collect_user_metrics(user_id, height, weight)?;

    // Load menu
    let items = load_menu_items(cli)?;
    println!("Loaded {} menu items", items.len());

    let config = RecommendConfig { profile, strategy };
    let result = recommend(items, height_cm, weight_kg, &config)?;

    // Display results
    display_recommendation(&result);

    // Offer to save
    if prompt_yes_no("Save this plan?", true)? {
        let api = PlanApi::new(cli.plans_url.as_str());
        let record = api.create(&user_id, &result)?;
        match record.id {
            Some(id) => println!("Plan saved with id {}.", id),
            None => println!("Plan saved."),
        }
    }

    Ok(())
}

/// Show today's menu grouped by place.
fn cmd_menu(cli: &Cli, place: Option<String>, save: Option<PathBuf>) -> Result<()> {
    let items = load_menu_items(cli)?;

    if items.is_empty() {
        println!("No menu data.");
        return Ok(());
    }

    let boards = group_by_place(&items);

    match place {
        Some(query) => {
            let places: Vec<String> = boards.iter().map(|b| b.place.clone()).collect();
            if let Some(chosen) = choose_place(&places, &query)? {
                if let Some(board) = boards.iter().find(|b| b.place == chosen) {
                    display_menu_board(board);
                    println!();
                }
            }
        }
        None => display_menu_boards(&boards),
    }

    if let Some(path) = save {
        save_menu(&path, &items)?;
        println!("Menu saved to {}", path.display());
    }

    Ok(())
}

/// List saved plans and manage them interactively.
fn cmd_history(cli: &Cli, user_id: Option<String>) -> Result<()> {
    let user_id = match user_id {
        Some(id) => id,
        None => prompt_user_id()?,
    };

    let api = PlanApi::new(cli.plans_url.as_str());
    let mut plans = api.list_for_user(&user_id)?;

    if plans.is_empty() {
        println!("No saved plans for {}.", user_id);
        return Ok(());
    }

    display_history(&plans);

    let actions = vec!["Delete a plan".to_string(), "Edit a memo".to_string()];

    loop {
        let action = match choose_from_list("What next?", &actions)? {
            Some(a) => a,
            None => break,
        };

        let labels: Vec<String> = plans.iter().map(history_line).collect();
        let index = match choose_from_list("Which plan?", &labels)? {
            Some(i) => i,
            None => continue,
        };

        if action == 0 {
            if prompt_yes_no("Delete this plan?", false)? {
                let plan_id = plans[index].id.clone();
                match plan_id {
                    Some(id) => {
                        api.delete(&id)?;
                        plans.remove(index);
                        println!("Plan deleted.");
                    }
                    None => println!("This plan has no id and cannot be deleted."),
                }
            }
        } else {
            let memo = prompt_memo()?;
            let updated = api.update_memo(&plans[index], &memo)?;
            plans[index] = updated;
            println!("Memo updated.");
        }

        if plans.is_empty() {
            break;
        }
        display_history(&plans);
    }

    Ok(())
}

/// Turn the sex, age and activity flags into an energy profile.
fn build_profile(sex: &str, age: u32, activity: &str) -> Result<ProfileConfig> {
    let sex = Sex::from_name(sex)
        .ok_or_else(|| MealError::InvalidInput(format!("Unknown sex '{}'", sex)))?;
    let activity = ActivityLevel::from_name(activity)
        .ok_or_else(|| MealError::InvalidInput(format!("Unknown activity level '{}'", activity)))?;

    Ok(ProfileConfig {
        sex,
        age_years: age,
        activity_factor: activity.factor(),
        ..ProfileConfig::default()
    })
}

/// Turn the search flags into a concrete strategy.
fn build_strategy(search: &str, trials: usize, seed: Option<u64>) -> Result<SearchStrategy> {
    match search {
        "exhaustive" => Ok(SearchStrategy::Exhaustive),
        "sampled" => Ok(SearchStrategy::Sampled {
            trials,
            seed: pick_seed(seed),
        }),
        "auto" => Ok(SearchStrategy::Auto {
            trials,
            seed: pick_seed(seed),
        }),
        other => Err(MealError::InvalidInput(format!(
            "Unknown search mode '{}'",
            other
        ))),
    }
}

/// Use the given seed, or draw one and tell the user so the run can be
/// reproduced.
fn pick_seed(seed: Option<u64>) -> u64 {
    match seed {
        Some(s) => s,
        None => {
            let s: u64 = rand::random();
            println!("Search seed: {} (pass --seed to reproduce)", s);
            s
        }
    }
}

/// Load menu items from the configured file or endpoint.
fn load_menu_items(cli: &Cli) -> Result<Vec<MenuItem>> {
    match &cli.menu_file {
        Some(path) => load_menu_file(path),
        None => MenuApi::new(cli.menu_url.as_str()).fetch_menu(),
    }
}
