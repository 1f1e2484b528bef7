use super::batch_model::{BatchOperation, ItemResult, Outcome};
use crate::events::{Notice, Severity};

/// Classifies a completed batch's per-item results. Total over every list
/// length; an empty batch is a success.
pub fn aggregate(results: &[ItemResult]) -> Outcome {
    let total = results.len() as u32;
    let failed = results.iter().filter(|result| result.is_err()).count() as u32;
    if failed == 0 {
        Outcome::Success
    } else if failed == total {
        Outcome::TotalFailure
    } else {
        Outcome::PartialFailure { failed, total }
    }
}

/// Builds the single user-facing summary for a batch outcome. A zero-item
/// batch produces no notice.
pub fn outcome_notice(operation: BatchOperation, outcome: Outcome, total: u32) -> Option<Notice> {
    if total == 0 {
        return None;
    }
    let (severity, message) = match outcome {
        Outcome::Success => (
            Severity::Success,
            format!(
                "{} {} addon{}",
                operation.verb_done(),
                total,
                plural(total)
            ),
        ),
        Outcome::PartialFailure { failed, total } => (
            Severity::Warn,
            format!(
                "Failed to {} {} of {} addon{}",
                operation.verb(),
                failed,
                total,
                plural(total)
            ),
        ),
        Outcome::TotalFailure => (
            Severity::Error,
            format!(
                "Failed to {} all {} addon{}",
                operation.verb(),
                total,
                plural(total)
            ),
        ),
    };
    Some(Notice {
        severity,
        title: format!("{} Addons", operation),
        message,
    })
}

fn plural(n: u32) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}
