use thiserror::Error;

/// Call-level failures of a batch operation: the command itself cannot be
/// serviced. Failures of individual items never surface here; they are
/// captured per item inside the result list.
#[derive(Debug, Error)]
pub enum BatchError {
    #[error("Can only unsubscribe when a workshop API key is configured")]
    UnsubscribeUnavailable,
}

/// Errors of the addon file store port.
#[derive(Debug, Error)]
pub enum FileStoreError {
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Trash(String),
}

/// Result type for batch operations
pub type Result<T> = std::result::Result<T, BatchError>;
