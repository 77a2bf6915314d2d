use serde::Deserialize;

/// Stored credential rejected.
pub const ERR_UNAUTHORIZED: i32 = 1;
/// Pairing requested but the physical link button has not been pressed.
pub const ERR_LINK_NOT_PRESSED: i32 = 101;

#[derive(Debug, Deserialize)]
pub struct BridgeError {
    #[serde(rename = "type")]
    pub error_type: i32,
    #[serde(default)]
    pub address: String,
    pub description: String,
}

/// One element of the array the bridge returns for every write. Each carries
/// either a `success` object or an `error` object.
#[derive(Debug, Deserialize)]
pub struct BridgeResult {
    pub success: Option<serde_json::Value>,
    pub error: Option<BridgeError>,
}

impl BridgeResult {
    pub fn successful(&self) -> bool {
        self.success.is_some()
    }
}

/// First error envelope in a write response, if any.
pub fn first_error(results: &[BridgeResult]) -> Option<&BridgeError> {
    results.iter().find_map(|r| r.error.as_ref())
}

/// Reads against a bad credential come back as an error array instead of the
/// requested resource. Detect that shape on an arbitrary response body.
pub fn error_from_value(value: &serde_json::Value) -> Option<BridgeError> {
    let items = value.as_array()?;
    items
        .iter()
        .find_map(|item| serde_json::from_value::<BridgeError>(item.get("error")?.clone()).ok())
}
