//! Profile persistence (load/save to disk).
//!
//! Both directions degrade gracefully: a missing or malformed file loads
//! as a fresh profile, and a failed save leaves the previous file in
//! place. Neither failure reaches the caller as an error worth aborting
//! play over.

use super::types::PlayerProfile;
use crate::utils::persistence::save_path;
use log::warn;
use std::fs;
use std::io;
use std::path::Path;

const PROFILE_FILE: &str = "profile.json";

/// Load the profile from the default location, falling back to defaults.
pub fn load_profile() -> PlayerProfile {
    match save_path(PROFILE_FILE) {
        Ok(path) => load_profile_from(&path),
        Err(e) => {
            warn!("profile directory unavailable, using defaults: {}", e);
            PlayerProfile::default()
        }
    }
}

/// Load a profile from an explicit path, falling back to defaults.
pub fn load_profile_from(path: &Path) -> PlayerProfile {
    match fs::read_to_string(path) {
        Ok(json) => match serde_json::from_str(&json) {
            Ok(profile) => profile,
            Err(e) => {
                warn!("malformed profile at {}: {}", path.display(), e);
                PlayerProfile::default()
            }
        },
        Err(_) => PlayerProfile::default(),
    }
}

/// Save the profile to the default location.
pub fn save_profile(profile: &PlayerProfile) -> io::Result<()> {
    save_profile_to(&save_path(PROFILE_FILE)?, profile)
}

/// Save the profile as pretty-printed JSON to an explicit path.
pub fn save_profile_to(path: &Path, profile: &PlayerProfile) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(profile)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(path, json)?;
    Ok(())
}
