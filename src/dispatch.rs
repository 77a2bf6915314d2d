use std::path::Path;

use rand::Rng;
use serde_json::{json, Value};

use crate::api::lights::LightsApi;
use crate::color::resolve_color;
use crate::config::RuntimeConfig;
use crate::directory::FleetPreset;
use crate::error::AppError;
use crate::models::light::number_by_uniqueid;
use crate::models::{group, profile};
use crate::state::{to_raw, Effect, StateKey, StateValue};

/// A validated device-targeted command. Parsing happens once, before any
/// target is touched, so whole-command validation errors never reach the
/// bridge.
#[derive(Debug, Clone, PartialEq)]
pub enum DeviceCommand {
    /// No command given: dump current state.
    Info,
    /// `turn on` / `turn off`; any other parameter is a silent no-op.
    Turn(Option<bool>),
    Color(String),
    SetState { key: StateKey, value: StateValue },
    Percent { key: StateKey, raw: u16 },
    /// Key is deliberately unvalidated; an absent key reads as `undefined`.
    GetState(String),
    Randomize,
    Effect(Effect),
}

pub fn parse_device_command(args: &[String]) -> Result<DeviceCommand, AppError> {
    let Some(command) = args.first() else {
        return Ok(DeviceCommand::Info);
    };
    let params = &args[1..];

    match command.to_lowercase().as_str() {
        "turn" => Ok(DeviceCommand::Turn(
            match params.first().map(String::as_str) {
                Some("on") => Some(true),
                Some("off") => Some(false),
                _ => None,
            },
        )),
        "color" => {
            let name = params.first().ok_or_else(|| {
                AppError::InvalidInput("color requires a color name".into())
            })?;
            Ok(DeviceCommand::Color(name.clone()))
        }
        "setstate" | "set" => {
            let key_token = params.first().ok_or_else(|| {
                AppError::InvalidInput("setstate requires a state key and a value".into())
            })?;
            let value_token = params.get(1).ok_or_else(|| {
                AppError::InvalidInput("setstate requires a state key and a value".into())
            })?;
            // Key validation first, then value coercion.
            let key: StateKey = key_token.parse()?;
            Ok(DeviceCommand::SetState {
                key,
                value: StateValue::coerce(value_token),
            })
        }
        "percent" => {
            let key_token = params.first().ok_or_else(|| {
                AppError::InvalidInput("percent requires a state key and a percentage".into())
            })?;
            let percent_token = params.get(1).ok_or_else(|| {
                AppError::InvalidInput("percent requires a state key and a percentage".into())
            })?;
            let key: StateKey = key_token.parse()?;
            let percent: u8 = percent_token.parse().map_err(|_| {
                AppError::InvalidInput(format!("Invalid percentage '{}'", percent_token))
            })?;
            let raw = to_raw(key, percent)?;
            Ok(DeviceCommand::Percent { key, raw })
        }
        "getstate" => {
            let key = params.first().ok_or_else(|| {
                AppError::InvalidInput("getstate requires a state key".into())
            })?;
            Ok(DeviceCommand::GetState(key.clone()))
        }
        "randomize" => Ok(DeviceCommand::Randomize),
        other => match Effect::from_modifier(other) {
            Some(effect) => Ok(DeviceCommand::Effect(effect)),
            None => Err(AppError::InvalidCommand(command.clone())),
        },
    }
}

/// One combined random state update. Brightness and saturation floors stay
/// clear of the imperceptibly dim/washed-out range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomStates {
    pub hue: u16,
    pub bri: u8,
    pub sat: u8,
}

pub fn randomize_states<R: Rng>(rng: &mut R) -> RandomStates {
    RandomStates {
        hue: rng.gen_range(0..=65535),
        bri: rng.gen_range(30..=254),
        sat: rng.gen_range(30..=254),
    }
}

impl RandomStates {
    pub fn to_json(&self) -> Value {
        json!({ "hue": self.hue, "bri": self.bri, "sat": self.sat })
    }
}

fn single_state(key: StateKey, value: Value) -> Value {
    let mut map = serde_json::Map::new();
    map.insert(key.as_str().to_string(), value);
    Value::Object(map)
}

/// Apply one validated command to one light.
pub async fn apply_device(
    api: &LightsApi,
    id: u32,
    command: &DeviceCommand,
) -> Result<(), AppError> {
    match command {
        DeviceCommand::Info => {
            let info = api.light(id).await?;
            let name = info.get("name").and_then(|v| v.as_str()).unwrap_or("unknown");
            let on = info.pointer("/state/on").and_then(|v| v.as_bool()).unwrap_or(false);
            println!("Light: {} name: {} | on? {}", id, name, on);
            println!("All info: {}", info);
        }
        DeviceCommand::Turn(Some(on)) => {
            println!("Setting light {} on to {}", id, on);
            api.set_light_state(id, &single_state(StateKey::On, json!(on)))
                .await?;
        }
        DeviceCommand::Turn(None) => {}
        DeviceCommand::Color(name) => {
            let hue = resolve_color(name)?;
            println!("Setting light {} hue to {}", id, hue);
            api.set_light_state(id, &single_state(StateKey::Hue, json!(hue)))
                .await?;
        }
        DeviceCommand::SetState { key, value } => {
            let value = serde_json::to_value(value)?;
            println!("Setting light {} {} to {}", id, key, value);
            api.set_light_state(id, &single_state(*key, value)).await?;
        }
        DeviceCommand::Percent { key, raw } => {
            println!("Setting light {} {} to {}", id, key, raw);
            api.set_light_state(id, &single_state(*key, json!(raw))).await?;
        }
        DeviceCommand::GetState(key) => {
            let info = api.light(id).await?;
            match info.pointer(&format!("/state/{}", key)) {
                Some(value) => println!("{}", value),
                None => println!("undefined"),
            }
        }
        DeviceCommand::Randomize => {
            let states = randomize_states(&mut rand::thread_rng());
            println!(
                "Brightness: {} | Hue: {} | Saturation: {}",
                states.bri, states.hue, states.sat
            );
            api.set_light_state(id, &states.to_json()).await?;
        }
        DeviceCommand::Effect(effect) => {
            api.set_light_state(id, &single_state(StateKey::Effect, json!(effect.as_str())))
                .await?;
        }
    }
    Ok(())
}

/// A group-targeted command. Parsing cannot fail: anything unrecognized is
/// carried as a candidate color name and resolved at apply time.
#[derive(Debug, Clone, PartialEq)]
pub enum GroupCommand {
    Info,
    Sat(u8),
    Effect(Effect),
    ColorName(String),
}

pub fn parse_group_command(args: &[String]) -> Result<GroupCommand, AppError> {
    let Some(command) = args.first() else {
        return Ok(GroupCommand::Info);
    };
    match command.as_str() {
        "sat" => {
            let value = args.get(1).ok_or_else(|| {
                AppError::InvalidInput("sat requires a saturation value".into())
            })?;
            let sat: u8 = value.parse().map_err(|_| {
                AppError::InvalidInput(format!("Invalid saturation '{}'", value))
            })?;
            Ok(GroupCommand::Sat(sat))
        }
        other => match Effect::from_modifier(other) {
            Some(effect) => Ok(GroupCommand::Effect(effect)),
            None => Ok(GroupCommand::ColorName(command.clone())),
        },
    }
}

/// Apply one group command. An unmatched color name is a silent no-op here,
/// unlike the device-targeted `color` command where it is fatal.
pub async fn apply_group(
    api: &LightsApi,
    id: u32,
    command: &GroupCommand,
    config: &RuntimeConfig,
) -> Result<(), AppError> {
    match command {
        GroupCommand::Info => {
            let info = api.group(id).await?;
            let name = info.get("name").and_then(|v| v.as_str()).unwrap_or("unknown");
            println!("Group: {} | name: {} | All info: {}", id, name, info);
        }
        GroupCommand::Sat(sat) => {
            api.set_group_state(id, &single_state(StateKey::Sat, json!(sat)))
                .await?;
        }
        GroupCommand::Effect(effect) => {
            api.set_group_state(id, &single_state(StateKey::Effect, json!(effect.as_str())))
                .await?;
        }
        GroupCommand::ColorName(name) => match resolve_color(name) {
            Ok(hue) => {
                println!("Turning group {} {}", id, name);
                api.set_group_state(id, &single_state(StateKey::Hue, json!(hue)))
                    .await?;
            }
            Err(AppError::ColorNotFound(_)) => {
                if config.verbose {
                    eprintln!("Did not match any colors with {}", name);
                }
            }
            Err(err) => return Err(err),
        },
    }
    Ok(())
}

/// Immediate full-fleet commands, issued against group 0.
pub async fn apply_fleet(api: &LightsApi, preset: FleetPreset) -> Result<(), AppError> {
    let states = match preset {
        FleetPreset::On => json!({ "on": true }),
        FleetPreset::Off => json!({ "on": false }),
        FleetPreset::Bright => json!({ "on": true, "bri": 254, "sat": 40, "hue": 8402 }),
        FleetPreset::Dim => json!({
            "on": true,
            "bri": to_raw(StateKey::Bri, 50)?,
            "sat": to_raw(StateKey::Sat, 20)?,
            "hue": to_raw(StateKey::Hue, 50)?,
        }),
    };
    api.set_group_state(group::ALL_LIGHTS, &states).await
}

/// Snapshot every light's state, keyed by hardware id, and print it.
pub async fn capture_profile(api: &LightsApi) -> Result<(), AppError> {
    let lights = api.lights().await?;
    let captured = profile::capture(&lights);
    println!("{}", serde_json::to_string(&captured)?);
    Ok(())
}

/// Replay a saved profile. Each entry is a separate state change; a light
/// that left the bridge is skipped with a warning, a transport failure
/// aborts with the already-applied entries left in place.
pub async fn apply_profile(api: &LightsApi, path: &Path) -> Result<(), AppError> {
    let saved = profile::load(path)?;
    let lights = api.lights().await?;
    for (uniqueid, state) in &saved {
        match number_by_uniqueid(&lights, uniqueid) {
            Some(id) => {
                api.set_light_state(id, &serde_json::to_value(state)?).await?;
            }
            None => eprintln!("Skipping {}: no such light on the bridge", uniqueid),
        }
    }
    Ok(())
}
