// Module declarations
pub(crate) mod addons_errors;
pub(crate) mod addons_model;
pub(crate) mod addons_repository;
pub(crate) mod addons_service;
pub(crate) mod addons_traits;

// Re-export the public interface
pub use addons_model::{Addon, AddonContent, AddonEntry, AddonFlags, ParsedAddonInfo, WorkshopItem};
pub use addons_repository::InMemoryCatalog;
pub use addons_service::AddonService;
pub use addons_traits::{AddonCatalogTrait, WorkshopClientTrait};

// Re-export error types for convenience
pub use addons_errors::{AddonError, Result};

#[cfg(test)]
mod tests;
