use std::sync::Arc;

use log::debug;

use super::addons_errors::{AddonError, Result};
use super::addons_model::AddonEntry;
use super::addons_traits::AddonCatalogTrait;

/// Service for the single-item catalog commands (listing, tagging).
pub struct AddonService {
    catalog: Arc<dyn AddonCatalogTrait>,
}

impl AddonService {
    pub fn new(catalog: Arc<dyn AddonCatalogTrait>) -> Self {
        Self { catalog }
    }

    pub async fn list(&self) -> Result<Vec<AddonEntry>> {
        self.catalog.list().await
    }

    pub async fn get(&self, filename: &str) -> Result<Option<AddonEntry>> {
        self.catalog.get_by_filename(filename).await
    }

    /// Adds a free-form tag to an entry. Adding an existing tag is a no-op.
    pub async fn add_tag(&self, filename: &str, tag: &str) -> Result<()> {
        let tag = normalize_tag(tag)?;
        debug!("add tag {:?} to {}", tag, filename);
        self.catalog.add_tag(filename, &tag).await
    }

    pub async fn remove_tag(&self, filename: &str, tag: &str) -> Result<()> {
        let tag = normalize_tag(tag)?;
        debug!("remove tag {:?} from {}", tag, filename);
        self.catalog.remove_tag(filename, &tag).await
    }
}

fn normalize_tag(tag: &str) -> Result<String> {
    let tag = tag.trim();
    if tag.is_empty() {
        return Err(AddonError::InvalidInput("tag must not be empty".to_string()));
    }
    Ok(tag.to_string())
}
