use lazy_static::lazy_static;
use regex::Regex;

use crate::addons::{AddonContent, AddonFlags};

lazy_static! {
    static ref WORKSHOP_URL_REGEX: Regex =
        Regex::new(r"https://steamcommunity\.com/sharedfiles/filedetails/\?id=(\d+)")
            .expect("invalid workshop url regex");
    // Workshop ids are sequential and were past 10000 when workshop support
    // shipped, so 4 digits is a safe minimum.
    static ref WORKSHOP_FILE_REGEX: Regex =
        Regex::new(r"\d{4,}").expect("invalid workshop file regex");
}

/// Attempts to extract a workshop ID from the filename or the addon url.
/// The filename wins so the user can override the id by renaming the file.
pub(crate) fn find_workshop_id(filename: &str, addon_url: Option<&str>) -> Option<i64> {
    if let Some(cap) = WORKSHOP_FILE_REGEX.find(filename) {
        if let Ok(id) = cap.as_str().parse::<i64>() {
            return Some(id);
        }
    }

    if let Some(url) = addon_url {
        if let Some(capture) = WORKSHOP_URL_REGEX.captures(url) {
            if let Ok(id) = capture[1].parse::<i64>() {
                return Some(id);
            }
        }
    }

    None
}

/// Builds the flag bitset from parsed content booleans and file origin.
pub(crate) fn flags_from_content(content: &AddonContent, workshop: bool) -> AddonFlags {
    let mut flags = AddonFlags::empty();
    if workshop {
        flags |= AddonFlags::WORKSHOP;
    }
    if content.is_map {
        flags |= AddonFlags::CAMPAIGN;
    }
    if content.is_survivor {
        flags |= AddonFlags::SURVIVOR;
    }
    if content.is_script {
        flags |= AddonFlags::SCRIPT;
    }
    if content.is_skin {
        flags |= AddonFlags::SKIN;
    }
    if content.is_weapon {
        flags |= AddonFlags::WEAPON;
    }
    flags
}
