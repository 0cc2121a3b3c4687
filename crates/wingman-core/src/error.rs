use crate::generate::CompletionError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WingmanError {
    #[error("no record with ID {0}")]
    ReportNotFound(u64),

    #[error("invalid count {requested}: must be between 1 and {max}")]
    InvalidCount { requested: usize, max: usize },

    #[error(transparent)]
    Generation(#[from] CompletionError),

    #[error("invalid config: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, WingmanError>;
