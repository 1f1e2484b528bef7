use std::path::PathBuf;

use async_trait::async_trait;
use log::trace;

use super::batch_errors::FileStoreError;
use super::batch_traits::AddonFileStoreTrait;
use crate::constants::{ADDON_EXTENSION, WORKSHOP_FOLDER};

/// Filesystem-backed [`AddonFileStoreTrait`] over the managed addons folder.
pub struct FsAddonFileStore {
    addons_dir: PathBuf,
}

impl FsAddonFileStore {
    pub fn new(addons_dir: PathBuf) -> Self {
        Self { addons_dir }
    }

    fn workshop_dir(&self) -> PathBuf {
        self.addons_dir.join(WORKSHOP_FOLDER)
    }
}

#[async_trait]
impl AddonFileStoreTrait for FsAddonFileStore {
    async fn migrate(&self, workshop_id: i64) -> Result<String, FileStoreError> {
        let filename = format!("{}.{}", workshop_id, ADDON_EXTENSION);
        let src = self.workshop_dir().join(&filename);
        let dest = self.addons_dir.join(&filename);
        // Copy, not move: the workshop copy stays until the service removes
        // it after unsubscribing.
        trace!("cp {:?} -> {:?}", src, dest);
        std::fs::copy(src, dest)?;
        Ok(filename)
    }

    async fn trash(&self, filename: &str) -> Result<(), FileStoreError> {
        let path = self.addons_dir.join(filename);
        trace!("trash {:?}", path);
        trash::delete(&path).map_err(|e| FileStoreError::Trash(e.to_string()))
    }
}
