use std::collections::BTreeMap;
use std::path::Path;

use super::light::{Light, LightState};
use crate::error::AppError;

/// A saved snapshot of every light's controllable state, keyed by the
/// durable hardware id so it survives bridge-side renumbering.
pub type Profile = BTreeMap<String, LightState>;

/// Snapshot the current bridge state into a profile.
pub fn capture(lights: &BTreeMap<u32, Light>) -> Profile {
    lights
        .values()
        .map(|light| (light.uniqueid.clone(), light.state.clone()))
        .collect()
}

/// Read a profile file. The existence check runs before any bridge traffic,
/// so a bad name fails without touching the network.
pub fn load(path: &Path) -> Result<Profile, AppError> {
    if !path.is_file() {
        return Err(AppError::ProfileNotFound(path.to_path_buf()));
    }
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}
