/// Event emitted when the scan job changes lifecycle state.
pub const SCAN_STATE: &str = "scan:state";

/// Event emitted once per classified item during a scan.
pub const SCAN_RESULT: &str = "scan:result";

/// Event emitted after each processed item with running progress counters.
pub const SCAN_PROGRESS: &str = "scan:progress";

/// Event carrying a user-facing notice (batch outcome summaries, new addons).
pub const ADDON_NOTICE: &str = "addons:notice";

/// Pause between consecutive workshop service calls, so a large selection
/// does not burst the remote API.
pub const REMOTE_CALL_PACING_MS: u64 = 500;

/// File extension of addon packages.
pub const ADDON_EXTENSION: &str = "vpk";

/// Subfolder of the addons folder holding subscribed workshop packages.
pub const WORKSHOP_FOLDER: &str = "workshop";
