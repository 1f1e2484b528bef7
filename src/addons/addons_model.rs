use bitflags::bitflags;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Content-kind flags of an addon. The bits are independent, not mutually
/// exclusive, and unknown bits are preserved so newer catalogs can round-trip
/// through an older core.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddonFlags(u32);

bitflags! {
    impl AddonFlags: u32 {
        /// Addon lives in the 'workshop' folder
        const WORKSHOP = 0b0000001;
        /// Addon is a campaign
        const CAMPAIGN = 0b0000010;
        /// Changes a survivor
        const SURVIVOR = 0b0000100;
        /// Changes / adds a script
        const SCRIPT = 0b0001000;
        /// Includes a texture change
        const SKIN = 0b0010000;
        /// Weapon change
        const WEAPON = 0b0100000;
    }
}

impl From<u32> for AddonFlags {
    fn from(flags: u32) -> Self {
        AddonFlags::from_bits_retain(flags)
    }
}

/// Flag-to-tag table, in flag-declaration order. WORKSHOP marks origin, not
/// content, so it has no tag.
const FLAG_TAG_NAMES: [(AddonFlags, &str); 5] = [
    (AddonFlags::CAMPAIGN, "Map"),
    (AddonFlags::SURVIVOR, "Survivor"),
    (AddonFlags::SCRIPT, "Script"),
    (AddonFlags::SKIN, "Skin"),
    (AddonFlags::WEAPON, "Weapon"),
];

impl AddonFlags {
    /// Human-readable content tags for the set bits. Unmapped bits decode to
    /// nothing.
    pub fn content_tags(&self) -> Vec<&'static str> {
        FLAG_TAG_NAMES
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
            .collect()
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Addon {
    /// Name of the file the addon was found in, unique within the catalog
    pub filename: String,
    /// When the addon file was last updated
    pub updated_at: DateTime<Utc>,
    /// When the addon file was created
    pub created_at: DateTime<Utc>,
    /// The size in bytes of the addon file
    pub file_size: i64,
    /// The flags parsed from the addon
    pub flags: AddonFlags,
    /// Title of the addon
    pub title: String,
    /// Author of the addon
    pub author: Option<String>,
    /// Version of the addon
    pub version: String,
    /// A short description of the addon
    pub tagline: Option<String>,
    /// Comma separated list of chapter ids, if a map
    pub chapter_ids: Option<String>,
    /// Extracted from either the addon info url or the filename
    pub workshop_id: Option<i64>,
}

/// Remote metadata of a workshop-sourced addon.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct WorkshopItem {
    pub published_file_id: i64,
    pub title: String,
}

/// A catalog entry as handed to the UI layer.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct AddonEntry {
    /// Info about the addon and its file
    pub addon: Addon,
    /// If a workshop item is linked, its contents here
    pub workshop_info: Option<WorkshopItem>,
    /// A list of user added tags for the entry
    pub tags: Vec<String>,
    pub enabled: bool,
}

/// Content booleans of a parsed addon, as reported by the format parser.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AddonContent {
    pub is_map: bool,
    pub is_survivor: bool,
    pub is_script: bool,
    pub is_skin: bool,
    pub is_weapon: bool,
}

/// Metadata parsed out of an addon package. Title and version are required
/// for a new catalog entry; their absence is an item-level parse failure.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParsedAddonInfo {
    pub title: Option<String>,
    pub version: Option<String>,
    pub author: Option<String>,
    pub tagline: Option<String>,
    pub addon_url: Option<String>,
    pub chapter_ids: Option<Vec<String>>,
    pub content: AddonContent,
}
