// Module declarations
pub(crate) mod scan_errors;
pub(crate) mod scan_helpers;
pub(crate) mod scan_model;
pub(crate) mod scan_service;
pub(crate) mod scan_source;
pub(crate) mod scan_traits;

// Re-export the public interface
pub use scan_model::{AddonFileData, ScanSpeed, ScanStatus};
pub use scan_service::ScanCoordinator;
pub use scan_source::FsAddonSource;
pub use scan_traits::{AddonParserTrait, AddonSourceTrait};

// Re-export error types for convenience
pub use scan_errors::{Result, ScanError};
