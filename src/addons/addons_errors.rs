use thiserror::Error;

/// Custom error type for addon catalog operations
#[derive(Debug, Error)]
pub enum AddonError {
    #[error("Addon not found: {0}")]
    NotFound(String),
    #[error("Addon already exists: {0}")]
    Duplicate(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Workshop service error: {0}")]
    Workshop(String),
}

/// Result type for addon catalog operations
pub type Result<T> = std::result::Result<T, AddonError>;
