use std::fmt::Display;

use serde::Serialize;

/// Outcome of one identifier within a batch operation. A batch always yields
/// exactly one of these per input identifier.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub enum ItemResult {
    Ok { filename: String },
    Error { filename: String, error: String },
}

impl ItemResult {
    pub fn ok(filename: impl Into<String>) -> Self {
        ItemResult::Ok {
            filename: filename.into(),
        }
    }

    pub fn error(filename: impl Into<String>, error: impl Into<String>) -> Self {
        ItemResult::Error {
            filename: filename.into(),
            error: error.into(),
        }
    }

    pub fn filename(&self) -> &str {
        match self {
            ItemResult::Ok { filename } => filename,
            ItemResult::Error { filename, .. } => filename,
        }
    }

    pub fn is_err(&self) -> bool {
        matches!(self, ItemResult::Error { .. })
    }
}

/// The batch operation kinds, used for logging and outcome summaries.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BatchOperation {
    Migrate,
    Unsubscribe,
    Enable,
    Disable,
    Delete,
}

impl BatchOperation {
    /// Infinitive verb, for failure messages ("failed to migrate ...").
    pub(crate) fn verb(&self) -> &'static str {
        match self {
            BatchOperation::Migrate => "migrate",
            BatchOperation::Unsubscribe => "unsubscribe",
            BatchOperation::Enable => "enable",
            BatchOperation::Disable => "disable",
            BatchOperation::Delete => "delete",
        }
    }

    /// Past-tense verb, for success messages ("Migrated 3 addons").
    pub(crate) fn verb_done(&self) -> &'static str {
        match self {
            BatchOperation::Migrate => "Migrated",
            BatchOperation::Unsubscribe => "Unsubscribed",
            BatchOperation::Enable => "Enabled",
            BatchOperation::Disable => "Disabled",
            BatchOperation::Delete => "Deleted",
        }
    }
}

impl Display for BatchOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BatchOperation::Migrate => write!(f, "Migrate"),
            BatchOperation::Unsubscribe => write!(f, "Unsubscribe"),
            BatchOperation::Enable => write!(f, "Enable"),
            BatchOperation::Disable => write!(f, "Disable"),
            BatchOperation::Delete => write!(f, "Delete"),
        }
    }
}

/// Aggregate severity of a completed batch, derived from its item results.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Success,
    PartialFailure { failed: u32, total: u32 },
    TotalFailure,
}
