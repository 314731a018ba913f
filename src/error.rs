//! Error types for daypicker

use chrono::NaiveDate;
use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// daypicker errors
#[derive(Error, Debug)]
pub enum Error {
    /// A click that fits nowhere in the current range
    #[error("Invalid range: cannot add {date} to {from:?}..{to:?}")]
    InvalidRange {
        date: NaiveDate,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    },

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_norway::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Error::Other(s.to_string())
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Other(s)
    }
}
