// Module declarations
pub(crate) mod events_model;
pub(crate) mod events_sink;
pub(crate) mod events_traits;

// Re-export the public interface
pub use events_model::{
    Notice, ScanProgress, ScanResultEvent, ScanResultKind, ScanStateEvent, Severity,
};
pub use events_sink::{AddonEvent, ChannelEventSink};
pub use events_traits::EventSinkTrait;

#[cfg(test)]
mod tests;
