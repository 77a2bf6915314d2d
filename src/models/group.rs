use std::collections::BTreeMap;

use serde::Deserialize;

use crate::error::AppError;

/// A bridge-defined named collection of lights. Group 0 is reserved and
/// targets every light. Groups are only queried here, never edited.
#[derive(Debug, Clone, Deserialize)]
pub struct Group {
    pub name: String,
    #[serde(default)]
    pub lights: Vec<String>,
}

/// Reserved "all lights" group.
pub const ALL_LIGHTS: u32 = 0;

/// Parse the `GET /groups` body: a JSON object keyed by numeric group ids.
pub fn groups_from_value(value: serde_json::Value) -> Result<BTreeMap<u32, Group>, AppError> {
    let raw: BTreeMap<String, Group> = serde_json::from_value(value)?;
    let mut groups = BTreeMap::new();
    for (id, group) in raw {
        let id = id
            .parse::<u32>()
            .map_err(|_| AppError::InvalidInput(format!("Bridge returned non-numeric group id '{}'", id)))?;
        groups.insert(id, group);
    }
    Ok(groups)
}

/// All group ids whose name matches, case-insensitively, in numeric order.
pub fn ids_by_name(groups: &BTreeMap<u32, Group>, name: &str) -> Vec<u32> {
    let wanted = name.to_lowercase();
    groups
        .iter()
        .filter(|(_, group)| group.name.to_lowercase() == wanted)
        .map(|(id, _)| *id)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> BTreeMap<u32, Group> {
        groups_from_value(json!({
            "1": {"name": "Kitchen", "lights": ["1", "2"], "type": "Room"},
            "2": {"name": "Bedroom", "lights": ["3"], "type": "Room"},
            "3": {"name": "kitchen", "lights": ["4"], "type": "Zone"}
        }))
        .unwrap()
    }

    #[test]
    fn name_match_is_case_insensitive_and_returns_all_matches() {
        assert_eq!(ids_by_name(&sample(), "KITCHEN"), vec![1, 3]);
        assert_eq!(ids_by_name(&sample(), "bedroom"), vec![2]);
    }

    #[test]
    fn unknown_name_yields_empty_list() {
        assert!(ids_by_name(&sample(), "garage").is_empty());
    }
}
