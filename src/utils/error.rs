use thiserror::Error;

use crate::models::ValidationErrors;

#[derive(Debug, Error)]
pub enum BookingError {
    #[error("Validation error: {0}")]
    Validation(ValidationErrors),
    #[error("Cannot {action} while the form is {phase}")]
    InvalidTransition {
        action: &'static str,
        phase: &'static str,
    },
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
