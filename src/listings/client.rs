//! HTTP client for the listing dataset.

use reqwest::Client;
use thiserror::Error;
use url::Url;

use crate::config::ListingsConfig;
use crate::listings::record::PropertyRecord;

/// Error fetching the dataset.
#[derive(Debug, Error)]
pub enum ListingsError {
    #[error("Transport failure: {0}")]
    Transport(String),

    #[error("Endpoint returned HTTP {0}")]
    Status(u16),

    #[error("Failed to decode dataset: {0}")]
    Decode(String),
}

/// Fetches the full dataset from the configured endpoint.
///
/// Every query re-fetches; there is no cache and no retry. Concurrent
/// fetches are safe since the client is immutable after construction.
#[derive(Debug, Clone)]
pub struct ListingsClient {
    http: Client,
    endpoint: Url,
}

impl ListingsClient {
    /// Build a client from configuration.
    pub fn new(config: &ListingsConfig) -> Result<Self, ListingsError> {
        let http = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| ListingsError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            endpoint: config.endpoint.clone(),
        })
    }

    /// The endpoint this client fetches from.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// GET the endpoint and decode the body as a JSON array of records.
    pub async fn fetch_all(&self) -> Result<Vec<PropertyRecord>, ListingsError> {
        let response = self
            .http
            .get(self.endpoint.clone())
            .send()
            .await
            .map_err(|e| ListingsError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ListingsError::Status(status.as_u16()));
        }

        response
            .json::<Vec<PropertyRecord>>()
            .await
            .map_err(|e| ListingsError::Decode(e.to_string()))
    }
}
