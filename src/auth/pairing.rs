use std::future::Future;
use std::io::Write;
use std::time::Duration;

use serde_json::json;

use crate::api::client::BridgeClient;
use crate::api::response::{self, ERR_LINK_NOT_PRESSED};
use crate::error::AppError;

/// Identity label sent with the pairing request.
pub const DEVICE_TYPE: &str = "huec#rust";

/// Doubling wait sequence for the link-button retry loop: 1s, 2s, 4s, ...
/// Unbounded; the loop runs until the button is pressed or the process is
/// interrupted.
#[derive(Debug)]
pub struct Backoff {
    next: Duration,
}

impl Backoff {
    pub fn new() -> Self {
        Self {
            next: Duration::from_secs(1),
        }
    }

    /// The wait before the next attempt; doubles on every call.
    pub fn next_wait(&mut self) -> Duration {
        let wait = self.next;
        self.next *= 2;
        wait
    }
}

impl Default for Backoff {
    fn default() -> Self {
        Self::new()
    }
}

/// Injection point for the retry wait, so the pairing loop tests against a
/// recording fake instead of sleeping for real.
pub trait Sleeper {
    fn sleep(&mut self, wait: Duration) -> impl Future<Output = ()>;
}

pub struct TokioSleeper;

impl Sleeper for TokioSleeper {
    fn sleep(&mut self, wait: Duration) -> impl Future<Output = ()> {
        tokio::time::sleep(wait)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairingState {
    Unauthenticated,
    LinkPending,
    Paired,
    Failed,
}

/// The one-time link-button handshake. Asks the bridge for a credential,
/// retrying with exponential backoff while the button stays unpressed.
pub struct PairingClient<'a> {
    client: &'a BridgeClient,
    state: PairingState,
}

impl<'a> PairingClient<'a> {
    pub fn new(client: &'a BridgeClient) -> Self {
        Self {
            client,
            state: PairingState::Unauthenticated,
        }
    }

    pub fn state(&self) -> PairingState {
        self.state
    }

    /// One pairing attempt. `Ok(None)` means the link button has not been
    /// pressed yet; anything else from the bridge is fatal.
    async fn attempt(&self) -> Result<Option<String>, AppError> {
        let results = self
            .client
            .post("/api", &json!({ "devicetype": DEVICE_TYPE }))
            .await?;

        if let Some(err) = response::first_error(&results) {
            if err.error_type == ERR_LINK_NOT_PRESSED {
                return Ok(None);
            }
            return Err(AppError::Bridge {
                error_type: err.error_type,
                description: err.description.clone(),
            });
        }

        for result in results {
            if let Some(success) = result.success {
                if let Some(username) = success.get("username").and_then(|v| v.as_str()) {
                    return Ok(Some(username.to_string()));
                }
            }
        }

        Err(AppError::InvalidInput(
            "Bridge pairing response carried no username".into(),
        ))
    }

    /// Block until the bridge issues a credential. The full prompt prints
    /// once, on the first unpressed-button response; later attempts only
    /// tick.
    pub async fn pair<S: Sleeper>(&mut self, sleeper: &mut S) -> Result<String, AppError> {
        self.state = PairingState::LinkPending;
        let mut backoff = Backoff::new();
        let mut prompted = false;

        loop {
            match self.attempt().await {
                Ok(Some(username)) => {
                    self.state = PairingState::Paired;
                    return Ok(username);
                }
                Ok(None) => {
                    if !prompted {
                        println!("Press the link button on the hue bridge.");
                        prompted = true;
                    }
                    sleeper.sleep(backoff.next_wait()).await;
                    print!(" ...");
                    let _ = std::io::stdout().flush();
                }
                Err(err) => {
                    self.state = PairingState::Failed;
                    return Err(err);
                }
            }
        }
    }
}

/// Verify a stored credential against the bridge and return the bridge's
/// display name. Any rejection is fatal; a rejected credential is never
/// repaired automatically.
pub async fn check_auth(client: &BridgeClient, username: &str) -> Result<String, AppError> {
    let body = client.get(&format!("/api/{}", username)).await?;
    if response::error_from_value(&body).is_some() {
        return Err(AppError::AuthenticationFailed);
    }
    Ok(body
        .get("config")
        .and_then(|config| config.get("name"))
        .and_then(|name| name.as_str())
        .unwrap_or("unknown")
        .to_string())
}
