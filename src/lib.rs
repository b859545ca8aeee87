pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod planner;
pub mod store;

pub use error::{MealError, Result};
pub use models::{MealCombo, MenuItem, Recommendation, TargetProfile};
