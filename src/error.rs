// error.rs - Engine error types

use thiserror::Error;

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, VolcanoError>;

/// Errors surfaced to the host page
#[derive(Debug, Error)]
pub enum VolcanoError {
    /// Configuration document could not be parsed
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    /// Configuration parsed but a value is out of range
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Host referred to a model slot that does not exist
    #[error("Unknown model slot: {0}")]
    UnknownModel(String),

    /// Bounding box cannot be normalized
    #[error("Invalid bounds: {0}")]
    InvalidBounds(String),

    /// Host reported that a model failed to load
    #[error("Failed to load {slot} model: {reason}")]
    ModelLoad { slot: &'static str, reason: String },
}
