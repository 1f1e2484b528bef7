use std::path::{Path, PathBuf};

use async_trait::async_trait;

use super::scan_errors::Result;
use super::scan_model::AddonFileData;
use crate::addons::ParsedAddonInfo;

/// Trait defining the contract for the addon file source a scan runs over.
#[async_trait]
pub trait AddonSourceTrait: Send + Sync {
    /// Enumerate every addon package. A failure here is fatal to the whole
    /// scan job.
    fn enumerate(&self) -> Result<Vec<PathBuf>>;

    /// Read metadata and parsed content of one package. A failure here only
    /// fails the item.
    async fn read(&self, path: &Path) -> Result<AddonFileData>;
}

/// Trait defining the contract for the addon package format parser. The
/// actual VPK parsing is the app layer's concern.
pub trait AddonParserTrait: Send + Sync {
    fn parse(&self, path: &Path) -> Result<ParsedAddonInfo>;
}
