use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::planner::{DEFAULT_AGE_YEARS, DEFAULT_TRIALS};
use crate::store::{DEFAULT_MENU_URL, DEFAULT_PLANS_URL};

/// MealMatch: pick the cafeteria meal combination closest to your daily energy target.
#[derive(Parser, Debug)]
#[command(name = "meal_match")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Menu endpoint to fetch items from.
    #[arg(long, global = true, default_value = DEFAULT_MENU_URL)]
    pub menu_url: String,

    /// Endpoint where saved plans live.
    #[arg(long, global = true, default_value = DEFAULT_PLANS_URL)]
    pub plans_url: String,

    /// Read the menu from a local JSON or CSV file instead of the endpoint.
    #[arg(long, global = true)]
    pub menu_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Recommend meal combinations for your calorie target.
    Recommend {
        /// User id to save the plan under.
        #[arg(long)]
        user_id: Option<String>,

        /// Height in centimeters.
        #[arg(long)]
        height: Option<f64>,

        /// Weight in kilograms.
        #[arg(long)]
        weight: Option<f64>,

        /// Biological sex for the energy formula: male or female.
        #[arg(long, default_value = "male")]
        sex: String,

        /// Age in years.
        #[arg(long, default_value_t = DEFAULT_AGE_YEARS)]
        age: u32,

        /// Activity level: sedentary, light, moderate, active or extra.
        #[arg(long, default_value = "light")]
        activity: String,

        /// Search mode: auto, exhaustive or sampled.
        #[arg(long, default_value = "auto")]
        search: String,

        /// Random combinations to draw in sampled mode.
        #[arg(long, default_value_t = DEFAULT_TRIALS)]
        trials: usize,

        /// Seed for the sampled search; picked at random when omitted.
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Show today's menu grouped by place.
    Menu {
        /// Only show places whose name matches this (fuzzy).
        #[arg(long)]
        place: Option<String>,

        /// Save the fetched menu to a JSON file.
        #[arg(long)]
        save: Option<PathBuf>,
    },

    /// List and manage your saved plans.
    History {
        /// User id whose plans to list.
        #[arg(long)]
        user_id: Option<String>,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Recommend {
            user_id: None,
            height: None,
            weight: None,
            sex: "male".to_string(),
            age: DEFAULT_AGE_YEARS,
            activity: "light".to_string(),
            search: "auto".to_string(),
            trials: DEFAULT_TRIALS,
            seed: None,
        }
    }
}
