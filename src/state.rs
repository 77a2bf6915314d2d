use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// The five controllable light attributes the bridge accepts in a state
/// change body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateKey {
    On,
    Sat,
    Hue,
    Bri,
    Effect,
}

impl StateKey {
    pub const ALL: [&'static str; 5] = ["on", "sat", "hue", "bri", "effect"];

    pub fn as_str(&self) -> &'static str {
        match self {
            StateKey::On => "on",
            StateKey::Sat => "sat",
            StateKey::Hue => "hue",
            StateKey::Bri => "bri",
            StateKey::Effect => "effect",
        }
    }

    /// Bridge-native maximum for keys that accept a percentage.
    pub fn max(&self) -> Option<u16> {
        match self {
            StateKey::Bri | StateKey::Sat => Some(254),
            StateKey::Hue => Some(65535),
            StateKey::On | StateKey::Effect => None,
        }
    }
}

impl fmt::Display for StateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StateKey {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, AppError> {
        match s {
            "on" => Ok(StateKey::On),
            "sat" => Ok(StateKey::Sat),
            "hue" => Ok(StateKey::Hue),
            "bri" => Ok(StateKey::Bri),
            "effect" => Ok(StateKey::Effect),
            other => Err(AppError::InvalidStateKey(other.to_string())),
        }
    }
}

/// A value destined for a state change body: the bridge expects a real JSON
/// boolean for `on`, integers for the numeric keys, and a string for
/// `effect`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StateValue {
    Bool(bool),
    Int(i64),
    Str(String),
}

impl StateValue {
    /// Coerce a raw CLI token after key validation: the literals
    /// "true"/"false" become booleans, fully numeric tokens become
    /// integers, anything else passes through as a string.
    pub fn coerce(raw: &str) -> Self {
        match raw {
            "true" => StateValue::Bool(true),
            "false" => StateValue::Bool(false),
            _ => raw
                .parse::<i64>()
                .map(StateValue::Int)
                .unwrap_or_else(|_| StateValue::Str(raw.to_string())),
        }
    }
}

/// The bridge's `effect` attribute.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Effect {
    #[default]
    None,
    Colorloop,
}

/// Tokens that mean "stop the color loop".
const CLEAR_ALIASES: [&str; 7] = ["clear", "none", "stop", "null", "nil", "regular", "normal"];

impl Effect {
    pub fn as_str(&self) -> &'static str {
        match self {
            Effect::None => "none",
            Effect::Colorloop => "colorloop",
        }
    }

    /// Recognize the always-available effect modifiers: `loop` starts the
    /// color loop, any of the clear aliases stops it. Other tokens are not
    /// effect modifiers.
    pub fn from_modifier(token: &str) -> Option<Effect> {
        if token == "loop" {
            Some(Effect::Colorloop)
        } else if CLEAR_ALIASES.contains(&token) {
            Some(Effect::None)
        } else {
            None
        }
    }
}

/// Convert a percentage into the bridge-native range for the given key.
/// Pure; keys without a maximum (`on`, `effect`) are rejected.
pub fn to_raw(key: StateKey, percent: u8) -> Result<u16, AppError> {
    if percent > 100 {
        return Err(AppError::InvalidInput(format!(
            "Percentage {} is out of range 0-100",
            percent
        )));
    }
    let max = key.max().ok_or(AppError::NoMaximumDefined(key))?;
    Ok((percent as f64 / 100.0 * max as f64) as u16)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_raw_endpoints_hit_zero_and_max() {
        for key in [StateKey::Bri, StateKey::Sat, StateKey::Hue] {
            assert_eq!(to_raw(key, 0).unwrap(), 0);
            assert_eq!(to_raw(key, 100).unwrap(), key.max().unwrap());
        }
    }

    #[test]
    fn to_raw_stays_in_range_and_is_monotonic() {
        for key in [StateKey::Bri, StateKey::Sat, StateKey::Hue] {
            let mut last = 0;
            for percent in 0..=100u8 {
                let raw = to_raw(key, percent).unwrap();
                assert!(raw <= key.max().unwrap());
                assert!(raw >= last, "{} regressed at {}%", key, percent);
                last = raw;
            }
        }
    }

    #[test]
    fn to_raw_known_values() {
        assert_eq!(to_raw(StateKey::Bri, 50).unwrap(), 127);
        assert_eq!(to_raw(StateKey::Sat, 20).unwrap(), 50);
        assert_eq!(to_raw(StateKey::Hue, 50).unwrap(), 32767);
    }

    #[test]
    fn to_raw_rejects_keys_without_maximum() {
        assert!(matches!(
            to_raw(StateKey::On, 50),
            Err(AppError::NoMaximumDefined(StateKey::On))
        ));
        assert!(matches!(
            to_raw(StateKey::Effect, 50),
            Err(AppError::NoMaximumDefined(StateKey::Effect))
        ));
    }

    #[test]
    fn to_raw_rejects_out_of_range_percent() {
        assert!(matches!(
            to_raw(StateKey::Bri, 101),
            Err(AppError::InvalidInput(_))
        ));
    }

    #[test]
    fn state_key_parses_exactly_the_allowed_set() {
        for name in StateKey::ALL {
            assert_eq!(name.parse::<StateKey>().unwrap().as_str(), name);
        }
        assert!(matches!(
            "brightness".parse::<StateKey>(),
            Err(AppError::InvalidStateKey(_))
        ));
    }

    #[test]
    fn coerce_booleans_integers_and_strings() {
        assert_eq!(StateValue::coerce("true"), StateValue::Bool(true));
        assert_eq!(StateValue::coerce("false"), StateValue::Bool(false));
        assert_eq!(StateValue::coerce("254"), StateValue::Int(254));
        assert_eq!(
            StateValue::coerce("colorloop"),
            StateValue::Str("colorloop".into())
        );
        // Mixed tokens are not numbers.
        assert_eq!(
            StateValue::coerce("12abc"),
            StateValue::Str("12abc".into())
        );
    }

    #[test]
    fn state_value_serializes_to_native_json() {
        assert_eq!(
            serde_json::to_string(&StateValue::Bool(true)).unwrap(),
            "true"
        );
        assert_eq!(serde_json::to_string(&StateValue::Int(127)).unwrap(), "127");
        assert_eq!(
            serde_json::to_string(&StateValue::Str("none".into())).unwrap(),
            "\"none\""
        );
    }

    #[test]
    fn effect_modifiers() {
        assert_eq!(Effect::from_modifier("loop"), Some(Effect::Colorloop));
        for alias in ["clear", "none", "stop", "null", "nil", "regular", "normal"] {
            assert_eq!(Effect::from_modifier(alias), Some(Effect::None));
        }
        assert_eq!(Effect::from_modifier("turn"), None);
    }

    #[test]
    fn effect_serde_roundtrip() {
        assert_eq!(
            serde_json::to_string(&Effect::Colorloop).unwrap(),
            "\"colorloop\""
        );
        let e: Effect = serde_json::from_str("\"none\"").unwrap();
        assert_eq!(e, Effect::None);
    }
}
