use std::path::PathBuf;
use thiserror::Error;

/// Streakbot error types
#[derive(Error, Debug)]
pub enum StreakError {
    #[error("Invalid date '{value}': expected YYYY-MM-DD")]
    InvalidDate {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Malformed record in '{}': {reason}", .path.display())]
    MalformedRecord { path: PathBuf, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl StreakError {
    /// Whether this error comes from bad user or stored data rather than the environment
    pub fn is_format(&self) -> bool {
        matches!(
            self,
            StreakError::InvalidDate { .. } | StreakError::MalformedRecord { .. }
        )
    }
}

/// Result type for Streakbot operations
pub type Result<T> = std::result::Result<T, StreakError>;
