use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::state::Effect;

/// One controllable light as reported by the bridge. The numeric id it is
/// listed under is stable only per bridge session; `uniqueid` is the durable
/// hardware key used for profile replay.
#[derive(Debug, Clone, Deserialize)]
pub struct Light {
    pub name: String,
    #[serde(default)]
    pub uniqueid: String,
    pub state: LightState,
}

/// The controllable slice of a light's state. Also the per-device record in
/// a profile file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LightState {
    pub on: bool,
    #[serde(default)]
    pub bri: u8,
    #[serde(default)]
    pub sat: u8,
    #[serde(default)]
    pub hue: u16,
    #[serde(default)]
    pub effect: Effect,
}

/// Parse the `GET /lights` body: a JSON object keyed by numeric light ids.
/// BTreeMap keys give deterministic, numerically ordered iteration.
pub fn lights_from_value(value: serde_json::Value) -> Result<BTreeMap<u32, Light>, AppError> {
    let raw: BTreeMap<String, Light> = serde_json::from_value(value)?;
    let mut lights = BTreeMap::new();
    for (id, light) in raw {
        let id = id
            .parse::<u32>()
            .map_err(|_| AppError::InvalidInput(format!("Bridge returned non-numeric light id '{}'", id)))?;
        lights.insert(id, light);
    }
    Ok(lights)
}

/// Look a light number up by its durable hardware id.
pub fn number_by_uniqueid(lights: &BTreeMap<u32, Light>, uniqueid: &str) -> Option<u32> {
    lights
        .iter()
        .find(|(_, light)| light.uniqueid == uniqueid)
        .map(|(id, _)| *id)
}
