use super::events_model::{Notice, ScanProgress, ScanResultEvent, ScanStateEvent};

/// Push-side port for the UI/log event layer. Delivery is fire-and-forget,
/// at most once per logical event; the core never blocks on a consumer.
pub trait EventSinkTrait: Send + Sync {
    fn scan_state(&self, event: ScanStateEvent);
    fn scan_result(&self, event: ScanResultEvent);
    fn scan_progress(&self, progress: ScanProgress);
    fn notice(&self, notice: Notice);
}
