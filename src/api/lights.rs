use std::collections::BTreeMap;

use serde_json::Value;

use super::client::BridgeClient;
use crate::error::AppError;
use crate::models::group::{groups_from_value, Group};
use crate::models::light::{lights_from_value, Light};

/// Credential-scoped operations on the bridge's light and group resources.
pub struct LightsApi {
    client: BridgeClient,
    username: String,
}

impl LightsApi {
    pub fn new(client: BridgeClient, username: String) -> Self {
        Self { client, username }
    }

    fn path(&self, rest: &str) -> String {
        format!("/api/{}{}", self.username, rest)
    }

    /// Full light listing, numerically ordered.
    pub async fn lights(&self) -> Result<BTreeMap<u32, Light>, AppError> {
        let body = self.client.get(&self.path("/lights")).await?;
        lights_from_value(body)
    }

    /// Raw state document for one light.
    pub async fn light(&self, id: u32) -> Result<Value, AppError> {
        self.client.get(&self.path(&format!("/lights/{}", id))).await
    }

    /// Full group listing, numerically ordered.
    pub async fn groups(&self) -> Result<BTreeMap<u32, Group>, AppError> {
        let body = self.client.get(&self.path("/groups")).await?;
        groups_from_value(body)
    }

    /// Raw state document for one group.
    pub async fn group(&self, id: u32) -> Result<Value, AppError> {
        self.client.get(&self.path(&format!("/groups/{}", id))).await
    }

    /// Issue a state change against one light.
    pub async fn set_light_state(&self, id: u32, states: &Value) -> Result<(), AppError> {
        self.client
            .put(&self.path(&format!("/lights/{}/state", id)), states)
            .await?;
        Ok(())
    }

    /// Issue a state change against one group (group 0 reaches every light).
    pub async fn set_group_state(&self, id: u32, states: &Value) -> Result<(), AppError> {
        self.client
            .put(&self.path(&format!("/groups/{}/action", id)), states)
            .await?;
        Ok(())
    }
}
