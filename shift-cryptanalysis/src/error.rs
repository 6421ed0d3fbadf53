//! Error types for shift-cipher analysis

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Invalid key {0} (must be between 1 and 25)")]
    InvalidKey(u8),

    #[error("Invalid frequency table: {0}")]
    InvalidFrequencyTable(String),

    #[error("Invalid scoring configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
