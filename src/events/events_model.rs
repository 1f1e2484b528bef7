use serde::{Deserialize, Serialize};

use crate::scan::ScanSpeed;

/// Lifecycle events of a scan job. Exactly one `Started` and one terminal
/// event (`Complete` or `Aborted`) are emitted per job instance.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
#[serde(tag = "state")]
pub enum ScanStateEvent {
    Started {
        speed: ScanSpeed,
    },
    Aborted {
        reason: Option<String>,
    },
    Complete {
        /// Wall-clock duration of the scan in seconds
        time: u64,
        total: u32,
        added: u32,
        updated: u32,
        failed: u32,
    },
}

/// How a single scanned file was classified against the catalog.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ScanResultKind {
    Updated,
    Renamed,
    Added,
    NoAction,
}

impl ScanResultKind {
    /// Title of the user-facing notice for this result, if it warrants one.
    /// `Updated` and `NoAction` are counted but never surfaced directly.
    pub fn notice_title(&self) -> Option<&'static str> {
        match self {
            ScanResultKind::Added => Some("New Addon Found"),
            ScanResultKind::Renamed => Some("Found Renamed Addon"),
            ScanResultKind::Updated | ScanResultKind::NoAction => None,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ScanResultEvent {
    pub result: ScanResultKind,
    pub filename: String,
}

impl ScanResultEvent {
    /// The notice shown to the user for this result, or `None` for the
    /// suppressed result kinds.
    pub fn notice(&self) -> Option<Notice> {
        self.result.notice_title().map(|title| Notice {
            severity: Severity::Success,
            title: title.to_string(),
            message: self.filename.clone(),
        })
    }
}

/// Running progress counters, emitted after each processed item.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScanProgress {
    /// Items processed so far
    pub value: u32,
    /// Items discovered by enumeration
    pub total: u32,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Success,
    Warn,
    Error,
}

/// A single user-facing notification.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub severity: Severity,
    pub title: String,
    pub message: String,
}
