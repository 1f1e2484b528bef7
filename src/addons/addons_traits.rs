use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::addons_errors::Result;
use super::addons_model::{Addon, AddonEntry, ParsedAddonInfo, WorkshopItem};

/// Trait defining the contract for the addon catalog. The durable backing
/// store lives in the app layer; the core only requires these operations.
///
/// Writes to a single entry must be serialized by the implementation so a
/// scan and a batch operation can never interleave a partial write.
#[async_trait]
pub trait AddonCatalogTrait: Send + Sync {
    async fn list(&self) -> Result<Vec<AddonEntry>>;
    async fn get_by_filename(&self, filename: &str) -> Result<Option<AddonEntry>>;
    async fn get_by_key(&self, title: &str, version: &str) -> Result<Option<AddonEntry>>;

    /// Insert a new entry, stamping it as seen by `scan_id`. Fails with
    /// `Duplicate` when the filename is already cataloged.
    async fn insert(&self, addon: Addon, scan_id: Uuid) -> Result<()>;

    /// Refresh file metadata (and any parsed fields present in `info`) of an
    /// existing entry, stamping it as seen by `scan_id`.
    async fn update_file_info(
        &self,
        filename: &str,
        updated_at: DateTime<Utc>,
        file_size: i64,
        info: &ParsedAddonInfo,
        scan_id: Uuid,
    ) -> Result<()>;

    /// Update the filename of the entry identified by `(title, version)`.
    /// Returns whether such an entry existed and was renamed.
    async fn rename(
        &self,
        title: &str,
        version: &str,
        new_filename: &str,
        scan_id: Uuid,
    ) -> Result<bool>;

    /// Stamp an unchanged entry as seen by `scan_id`.
    async fn touch(&self, filename: &str, scan_id: Uuid) -> Result<()>;

    /// Remove every entry not stamped by `scan_id` (its file is gone).
    /// Returns the removed filenames.
    async fn prune_unseen(&self, scan_id: Uuid) -> Result<Vec<String>>;

    /// Toggle the enabled flag only; never touches file content.
    async fn set_enabled(&self, filename: &str, enabled: bool) -> Result<()>;

    /// Remove an entry. Removing an unknown filename is a no-op.
    async fn delete(&self, filename: &str) -> Result<()>;

    async fn add_tag(&self, filename: &str, tag: &str) -> Result<()>;
    async fn remove_tag(&self, filename: &str, tag: &str) -> Result<()>;

    /// Workshop ids of every cataloged workshop item.
    async fn workshop_ids(&self) -> Result<Vec<i64>>;
    async fn add_workshop_items(&self, items: Vec<WorkshopItem>) -> Result<()>;
}

/// Trait defining the contract for the remote workshop service.
#[async_trait]
pub trait WorkshopClientTrait: Send + Sync {
    /// Whether the client is configured with credentials that allow
    /// unsubscribing on the user's behalf.
    fn can_unsubscribe(&self) -> bool;

    async fn unsubscribe(&self, id: i64) -> Result<()>;

    async fn fetch_items(&self, ids: &[i64]) -> Result<Vec<WorkshopItem>>;
}
