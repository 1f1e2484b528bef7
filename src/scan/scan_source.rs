use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::{info, warn};

use super::scan_errors::{Result, ScanError};
use super::scan_model::AddonFileData;
use super::scan_traits::{AddonParserTrait, AddonSourceTrait};
use crate::constants::{ADDON_EXTENSION, WORKSHOP_FOLDER};

/// Filesystem-backed [`AddonSourceTrait`]: enumerates `*.vpk` packages in the
/// addons folder and its workshop subfolder, delegating content parsing to
/// the injected parser.
pub struct FsAddonSource {
    root: PathBuf,
    parser: Arc<dyn AddonParserTrait>,
}

impl FsAddonSource {
    pub fn new(root: PathBuf, parser: Arc<dyn AddonParserTrait>) -> Self {
        Self { root, parser }
    }

    fn packages_in(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
        let mut list = Vec::new();
        for file in std::fs::read_dir(dir)? {
            let path = file?.path();
            if let Some(ext) = path.extension() {
                if ext == ADDON_EXTENSION {
                    list.push(path);
                }
            }
        }
        Ok(list)
    }
}

#[async_trait]
impl AddonSourceTrait for FsAddonSource {
    fn enumerate(&self) -> Result<Vec<PathBuf>> {
        info!("Scanning addons at {}", self.root.display());
        let mut list =
            Self::packages_in(&self.root).map_err(|e| ScanError::Enumerate(e.to_string()))?;

        // The workshop subfolder is optional; a missing or unreadable one is
        // not fatal to the scan.
        let workshop_dir = self.root.join(WORKSHOP_FOLDER);
        if workshop_dir.is_dir() {
            match Self::packages_in(&workshop_dir) {
                Ok(packages) => list.extend(packages),
                Err(e) => warn!("failed to scan workshop dir: {}", e),
            }
        }
        Ok(list)
    }

    async fn read(&self, path: &Path) -> Result<AddonFileData> {
        let meta = path.metadata()?;
        let filename = path
            .file_name()
            .ok_or_else(|| ScanError::Parse(format!("path has no filename: {:?}", path)))?
            .to_string_lossy()
            .to_string();
        let modified: DateTime<Utc> = meta.modified()?.into();
        // Creation time is unavailable on some filesystems
        let created: DateTime<Utc> = meta.created().map(Into::into).unwrap_or(modified);
        let workshop = path
            .parent()
            .and_then(|dir| dir.file_name())
            .map_or(false, |dir| dir == WORKSHOP_FOLDER);
        let info = self.parser.parse(path)?;

        Ok(AddonFileData {
            path: path.to_path_buf(),
            filename,
            modified,
            created,
            file_size: meta.len() as i64,
            workshop,
            info,
        })
    }
}
