use log::warn;
use serde::Serialize;
use tokio::sync::mpsc;

use super::events_model::{Notice, ScanProgress, ScanResultEvent, ScanStateEvent};
use super::events_traits::EventSinkTrait;
use crate::constants::{ADDON_NOTICE, SCAN_PROGRESS, SCAN_RESULT, SCAN_STATE};

/// A single event as it travels over the channel. The app layer forwards
/// each one to its UI event bus under [`AddonEvent::channel`].
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum AddonEvent {
    ScanState(ScanStateEvent),
    ScanResult(ScanResultEvent),
    ScanProgress(ScanProgress),
    Notice(Notice),
}

impl AddonEvent {
    /// Name of the UI event channel this payload belongs on.
    pub fn channel(&self) -> &'static str {
        match self {
            AddonEvent::ScanState(_) => SCAN_STATE,
            AddonEvent::ScanResult(_) => SCAN_RESULT,
            AddonEvent::ScanProgress(_) => SCAN_PROGRESS,
            AddonEvent::Notice(_) => ADDON_NOTICE,
        }
    }
}

/// [`EventSinkTrait`] implementation backed by an unbounded tokio channel.
/// Send failures (receiver dropped) are logged and swallowed.
pub struct ChannelEventSink {
    tx: mpsc::UnboundedSender<AddonEvent>,
}

impl ChannelEventSink {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<AddonEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    fn send(&self, event: AddonEvent) {
        if self.tx.send(event).is_err() {
            warn!("event receiver dropped, discarding event");
        }
    }
}

impl EventSinkTrait for ChannelEventSink {
    fn scan_state(&self, event: ScanStateEvent) {
        self.send(AddonEvent::ScanState(event));
    }

    fn scan_result(&self, event: ScanResultEvent) {
        self.send(AddonEvent::ScanResult(event));
    }

    fn scan_progress(&self, progress: ScanProgress) {
        self.send(AddonEvent::ScanProgress(progress));
    }

    fn notice(&self, notice: Notice) {
        self.send(AddonEvent::Notice(notice));
    }
}
