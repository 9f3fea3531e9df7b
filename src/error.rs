use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecompError {
    #[error("Supplement not found: {0}")]
    SupplementNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Supplement tools are locked until the guidelines are acknowledged (pass --acknowledge)")]
    Locked,
}

pub type Result<T> = std::result::Result<T, RecompError>;
