use crate::api::lights::LightsApi;
use crate::error::AppError;
use crate::models::group;

/// Immediate full-fleet operations, dispatched against group 0 without a
/// resolution step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FleetPreset {
    On,
    Off,
    Dim,
    Bright,
}

/// What a selector token asks for. Device and group targeting are mutually
/// exclusive per invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// `all_on`, `all_off`, or `all` with a recognized subword.
    Fleet(FleetPreset),
    /// Bare `all` (or `all` with an unrecognized subword): group 0.
    AllGroups,
    /// A numeric light id.
    Device(u32),
    /// `profile` with an optional profile name.
    Profile(Option<String>),
    /// Anything else: a group name to look up on the bridge.
    GroupName(String),
}

/// Classify a selector token. Pure; first match wins. Group names resolve
/// later against the bridge's current group listing.
pub fn classify(selector: &str, rest: &[String]) -> Selector {
    match selector {
        "all_on" => Selector::Fleet(FleetPreset::On),
        "all_off" => Selector::Fleet(FleetPreset::Off),
        "all" => match rest.first().map(String::as_str) {
            Some("dim") => Selector::Fleet(FleetPreset::Dim),
            Some("off") => Selector::Fleet(FleetPreset::Off),
            Some("on") => Selector::Fleet(FleetPreset::On),
            Some("bright") => Selector::Fleet(FleetPreset::Bright),
            _ => Selector::AllGroups,
        },
        "profile" => Selector::Profile(rest.first().cloned()),
        // A fully numeric token is a light id; anything containing other
        // characters falls through to group-name lookup.
        other => match other.parse::<u32>() {
            Ok(id) => Selector::Device(id),
            Err(_) => Selector::GroupName(other.to_string()),
        },
    }
}

/// Resolve a group name to its ids, case-insensitively. An unknown name is
/// an empty list, not an error; dispatch over it is a no-op.
pub async fn resolve_group_name(api: &LightsApi, name: &str) -> Result<Vec<u32>, AppError> {
    let groups = api.groups().await?;
    Ok(group::ids_by_name(&groups, name))
}
