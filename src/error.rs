use thiserror::Error;

#[derive(Debug, Error)]
pub enum MealError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("No lunch or dinner items in the menu")]
    NoMenuData,

    #[error("No menu combination found for the calorie target")]
    NoCombinationFound,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}

pub type Result<T> = std::result::Result<T, MealError>;
