// Module declarations
pub(crate) mod batch_aggregator;
pub(crate) mod batch_errors;
pub(crate) mod batch_files;
pub(crate) mod batch_model;
pub(crate) mod batch_service;
pub(crate) mod batch_traits;

// Re-export the public interface
pub use batch_aggregator::{aggregate, outcome_notice};
pub use batch_files::FsAddonFileStore;
pub use batch_model::{BatchOperation, ItemResult, Outcome};
pub use batch_service::BatchExecutor;
pub use batch_traits::AddonFileStoreTrait;

// Re-export error types for convenience
pub use batch_errors::{BatchError, FileStoreError, Result};
