use std::collections::{BTreeSet, HashMap};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use super::addons_errors::{AddonError, Result};
use super::addons_model::{Addon, AddonEntry, ParsedAddonInfo, WorkshopItem};
use super::addons_traits::AddonCatalogTrait;

#[derive(Clone, Debug)]
struct CatalogRecord {
    addon: Addon,
    tags: BTreeSet<String>,
    enabled: bool,
    last_seen: Option<Uuid>,
}

#[derive(Default)]
struct CatalogInner {
    entries: HashMap<String, CatalogRecord>,
    workshop: HashMap<i64, WorkshopItem>,
}

/// In-memory [`AddonCatalogTrait`] backend. This is the reference
/// implementation used by the core's tests and by embedders that do not need
/// durable storage; all writes go through one whole-catalog lock, so readers
/// always see a consistent snapshot.
#[derive(Default)]
pub struct InMemoryCatalog {
    inner: RwLock<CatalogInner>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CatalogInner {
    fn entry(&self, filename: &str) -> AddonEntry {
        let record = &self.entries[filename];
        let workshop_info = record
            .addon
            .workshop_id
            .and_then(|id| self.workshop.get(&id).cloned());
        AddonEntry {
            addon: record.addon.clone(),
            workshop_info,
            tags: record.tags.iter().cloned().collect(),
            enabled: record.enabled,
        }
    }

    fn record_mut(&mut self, filename: &str) -> Result<&mut CatalogRecord> {
        self.entries
            .get_mut(filename)
            .ok_or_else(|| AddonError::NotFound(filename.to_string()))
    }
}

#[async_trait]
impl AddonCatalogTrait for InMemoryCatalog {
    async fn list(&self) -> Result<Vec<AddonEntry>> {
        let inner = self.inner.read().await;
        let mut filenames: Vec<&String> = inner.entries.keys().collect();
        filenames.sort();
        Ok(filenames
            .into_iter()
            .map(|filename| inner.entry(filename))
            .collect())
    }

    async fn get_by_filename(&self, filename: &str) -> Result<Option<AddonEntry>> {
        let inner = self.inner.read().await;
        if !inner.entries.contains_key(filename) {
            return Ok(None);
        }
        Ok(Some(inner.entry(filename)))
    }

    async fn get_by_key(&self, title: &str, version: &str) -> Result<Option<AddonEntry>> {
        let inner = self.inner.read().await;
        let filename = inner
            .entries
            .values()
            .find(|record| record.addon.title == title && record.addon.version == version)
            .map(|record| record.addon.filename.clone());
        Ok(filename.map(|filename| inner.entry(&filename)))
    }

    async fn insert(&self, addon: Addon, scan_id: Uuid) -> Result<()> {
        let mut inner = self.inner.write().await;
        if inner.entries.contains_key(&addon.filename) {
            return Err(AddonError::Duplicate(addon.filename));
        }
        inner.entries.insert(
            addon.filename.clone(),
            CatalogRecord {
                addon,
                tags: BTreeSet::new(),
                enabled: true,
                last_seen: Some(scan_id),
            },
        );
        Ok(())
    }

    async fn update_file_info(
        &self,
        filename: &str,
        updated_at: DateTime<Utc>,
        file_size: i64,
        info: &ParsedAddonInfo,
        scan_id: Uuid,
    ) -> Result<()> {
        let mut inner = self.inner.write().await;
        let record = inner.record_mut(filename)?;
        record.addon.updated_at = updated_at;
        record.addon.file_size = file_size;
        if let Some(title) = &info.title {
            record.addon.title = title.clone();
        }
        if let Some(version) = &info.version {
            record.addon.version = version.clone();
        }
        if info.author.is_some() {
            record.addon.author = info.author.clone();
        }
        if info.tagline.is_some() {
            record.addon.tagline = info.tagline.clone();
        }
        record.last_seen = Some(scan_id);
        Ok(())
    }

    async fn rename(
        &self,
        title: &str,
        version: &str,
        new_filename: &str,
        scan_id: Uuid,
    ) -> Result<bool> {
        let mut inner = self.inner.write().await;
        let old_filename = inner
            .entries
            .values()
            .find(|record| record.addon.title == title && record.addon.version == version)
            .map(|record| record.addon.filename.clone());
        let Some(old_filename) = old_filename else {
            return Ok(false);
        };
        let mut record = inner
            .entries
            .remove(&old_filename)
            .ok_or_else(|| AddonError::NotFound(old_filename.clone()))?;
        record.addon.filename = new_filename.to_string();
        record.last_seen = Some(scan_id);
        inner.entries.insert(new_filename.to_string(), record);
        Ok(true)
    }

    async fn touch(&self, filename: &str, scan_id: Uuid) -> Result<()> {
        let mut inner = self.inner.write().await;
        inner.record_mut(filename)?.last_seen = Some(scan_id);
        Ok(())
    }

    async fn prune_unseen(&self, scan_id: Uuid) -> Result<Vec<String>> {
        let mut inner = self.inner.write().await;
        let missing: Vec<String> = inner
            .entries
            .values()
            .filter(|record| record.last_seen != Some(scan_id))
            .map(|record| record.addon.filename.clone())
            .collect();
        for filename in &missing {
            inner.entries.remove(filename);
        }
        Ok(missing)
    }

    async fn set_enabled(&self, filename: &str, enabled: bool) -> Result<()> {
        let mut inner = self.inner.write().await;
        inner.record_mut(filename)?.enabled = enabled;
        Ok(())
    }

    async fn delete(&self, filename: &str) -> Result<()> {
        let mut inner = self.inner.write().await;
        inner.entries.remove(filename);
        Ok(())
    }

    async fn add_tag(&self, filename: &str, tag: &str) -> Result<()> {
        let mut inner = self.inner.write().await;
        inner.record_mut(filename)?.tags.insert(tag.to_string());
        Ok(())
    }

    async fn remove_tag(&self, filename: &str, tag: &str) -> Result<()> {
        let mut inner = self.inner.write().await;
        inner.record_mut(filename)?.tags.remove(tag);
        Ok(())
    }

    async fn workshop_ids(&self) -> Result<Vec<i64>> {
        let inner = self.inner.read().await;
        Ok(inner.workshop.keys().copied().collect())
    }

    async fn add_workshop_items(&self, items: Vec<WorkshopItem>) -> Result<()> {
        let mut inner = self.inner.write().await;
        for item in items {
            inner.workshop.insert(item.published_file_id, item);
        }
        Ok(())
    }
}
