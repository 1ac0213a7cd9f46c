use thiserror::Error;

#[derive(Debug, Error)]
pub enum CalorieError {
    /// The catalog source is missing, unreadable, or holds a bad record.
    #[error("Catalog error at {location}: {message}")]
    DataSource { location: String, message: String },

    #[error("Food not found: {0}")]
    FoodNotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}

impl CalorieError {
    pub(crate) fn data_source(location: impl Into<String>, message: impl Into<String>) -> Self {
        CalorieError::DataSource {
            location: location.into(),
            message: message.into(),
        }
    }

    /// True for errors an interactive caller can recover from by asking again.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            CalorieError::FoodNotFound(_) | CalorieError::InvalidInput(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, CalorieError>;
