use serde_json::Value;

use super::response::{first_error, BridgeResult};
use crate::error::AppError;

/// Thin JSON transport to the bridge. Reads are plain GETs; state changes
/// are PUTs whose bodies are objects keyed by state names.
pub struct BridgeClient {
    client: reqwest::Client,
    base_url: String,
    verbose: bool,
}

impl BridgeClient {
    pub fn new(base_url: String, verbose: bool) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()?;
        Ok(Self {
            client,
            base_url,
            verbose,
        })
    }

    pub async fn get(&self, path: &str) -> Result<Value, AppError> {
        let url = format!("{}{}", self.base_url, path);
        if self.verbose {
            eprintln!("GET {}", url);
        }
        let response = self.client.get(&url).send().await?.error_for_status()?;
        let value: Value = response.json().await?;
        if self.verbose {
            eprintln!("Response: {}", value);
        }
        Ok(value)
    }

    /// Issue a state change. Any error envelope in the response is promoted
    /// to a fatal bridge error.
    pub async fn put(&self, path: &str, body: &Value) -> Result<Vec<BridgeResult>, AppError> {
        let results = self.write(reqwest::Method::PUT, path, body).await?;
        if let Some(err) = first_error(&results) {
            return Err(AppError::Bridge {
                error_type: err.error_type,
                description: err.description.clone(),
            });
        }
        Ok(results)
    }

    /// POST returning the raw result array. Used by pairing, which inspects
    /// the error envelope itself (link-button-not-pressed is not fatal).
    pub async fn post(&self, path: &str, body: &Value) -> Result<Vec<BridgeResult>, AppError> {
        self.write(reqwest::Method::POST, path, body).await
    }

    async fn write(
        &self,
        method: reqwest::Method,
        path: &str,
        body: &Value,
    ) -> Result<Vec<BridgeResult>, AppError> {
        let url = format!("{}{}", self.base_url, path);
        if self.verbose {
            eprintln!("{} {}", method, url);
            eprintln!("Body: {}", body);
        }
        let response = self
            .client
            .request(method, &url)
            .json(body)
            .send()
            .await?
            .error_for_status()?;
        let results: Vec<BridgeResult> = response.json().await?;
        if self.verbose {
            for result in &results {
                match (&result.success, &result.error) {
                    (Some(ok), _) => eprintln!("Success: {}", ok),
                    (_, Some(err)) => eprintln!("Error {}: {}", err.error_type, err.description),
                    _ => {}
                }
            }
        }
        Ok(results)
    }
}
