use thiserror::Error;

use crate::addons::AddonError;

/// Custom error type for scan operations. `AlreadyRunning` and `NotRunning`
/// are caller errors on the control surface, distinct from the I/O variants.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("A scan is already in progress")]
    AlreadyRunning,
    #[error("No scan is currently running")]
    NotRunning,
    #[error("Failed to enumerate addon directory: {0}")]
    Enumerate(String),
    #[error("IO error: {0}")]
    File(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Catalog error: {0}")]
    Catalog(#[from] AddonError),
}

/// Result type for scan operations
pub type Result<T> = std::result::Result<T, ScanError>;
