use thiserror::Error;

#[derive(Error, Debug)]
pub enum AlertError {
    #[error("Invalid time of day: {0} (expected HH:MM)")]
    InvalidTime(String),

    #[error("Invalid grouping: {0} (expected western or indian)")]
    InvalidGrouping(String),

    #[error("Invalid campaign record: {0}")]
    InvalidCampaign(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AlertError>;
