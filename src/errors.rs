use thiserror::Error;

use crate::addons::AddonError;
use crate::batch::BatchError;
use crate::scan::ScanError;

// Create a type alias for Result using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the addon manager core
#[derive(Error, Debug)]
pub enum Error {
    #[error("Scan operation failed: {0}")]
    Scan(#[from] ScanError),

    #[error("Batch operation failed: {0}")]
    Batch(#[from] BatchError),

    #[error("Addon catalog operation failed: {0}")]
    Addon(#[from] AddonError),
}
