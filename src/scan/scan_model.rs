use std::fmt::Display;
use std::path::PathBuf;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::addons::ParsedAddonInfo;

/// How aggressively the scan paces itself between items. Pacing trades scan
/// latency against interference with foreground work; it never changes what
/// the scan does to the catalog.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ScanSpeed {
    /// No pause between items
    Maximum,
    /// Short pause between items
    #[default]
    Normal,
    /// Long pause between items, for scanning behind a running game
    Background,
}

impl ScanSpeed {
    /// Pause inserted after each processed item.
    pub fn pause(&self) -> Option<Duration> {
        match self {
            ScanSpeed::Maximum => None,
            ScanSpeed::Normal => Some(Duration::from_millis(25)),
            ScanSpeed::Background => Some(Duration::from_millis(250)),
        }
    }
}

impl Display for ScanSpeed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScanSpeed::Maximum => write!(f, "maximum"),
            ScanSpeed::Normal => write!(f, "normal"),
            ScanSpeed::Background => write!(f, "background"),
        }
    }
}

/// Lifecycle state of the single process-wide scan job.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScanStatus {
    Inactive,
    Running,
    Cancelling,
}

/// Accumulated counts of one scan job, finalized at completion.
#[derive(Default, Clone, Copy, Debug)]
pub(crate) struct ScanCounter {
    pub total: u32,
    pub added: u32,
    pub updated: u32,
    pub failed: u32,
}

/// One discovered addon file: filesystem metadata plus parsed content.
#[derive(Clone, Debug)]
pub struct AddonFileData {
    pub path: PathBuf,
    pub filename: String,
    pub modified: DateTime<Utc>,
    pub created: DateTime<Utc>,
    pub file_size: i64,
    /// Whether the file sits in the workshop subfolder
    pub workshop: bool,
    pub info: ParsedAddonInfo,
}
