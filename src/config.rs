//! Listing endpoint configuration.
//!
//! The endpoint is a fixed public URL by default but can be pointed
//! elsewhere (a staging copy, a local fixture server in tests) through the
//! environment. Resolution reads a `.env` file first, then process env.

use std::time::Duration;

use url::Url;

use crate::error::ConfigError;

/// Default public endpoint serving the property-listing dataset.
pub const DEFAULT_ENDPOINT: &str = "https://api.npoint.io/488527433ae8fb2f1ce1/";

/// Default per-request timeout.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the listings client.
#[derive(Debug, Clone)]
pub struct ListingsConfig {
    /// Endpoint returning the full dataset as a JSON array.
    pub endpoint: Url,
    /// Timeout applied to each fetch.
    pub request_timeout: Duration,
}

impl ListingsConfig {
    /// Load a `.env` file if present, then resolve from the environment.
    ///
    /// Recognized variables: `LISTINGS_ENDPOINT`, `LISTINGS_TIMEOUT_SECS`.
    pub fn load() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_env()
    }

    /// Resolve from the process environment without touching `.env`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let endpoint = match optional_env("LISTINGS_ENDPOINT") {
            Some(raw) => Url::parse(&raw)
                .map_err(|e| ConfigError::invalid("LISTINGS_ENDPOINT", e.to_string()))?,
            None => default_endpoint(),
        };

        let request_timeout = match optional_env("LISTINGS_TIMEOUT_SECS") {
            Some(raw) => {
                let secs: u64 = raw
                    .parse()
                    .map_err(|_| ConfigError::invalid("LISTINGS_TIMEOUT_SECS", "expected seconds as a positive integer"))?;
                Duration::from_secs(secs)
            }
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        Ok(Self {
            endpoint,
            request_timeout,
        })
    }

    /// Configuration pointing at an explicit endpoint, default timeout.
    pub fn with_endpoint(endpoint: Url) -> Self {
        Self {
            endpoint,
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl Default for ListingsConfig {
    fn default() -> Self {
        Self::with_endpoint(default_endpoint())
    }
}

fn default_endpoint() -> Url {
    // The constant is a valid URL; parsing it cannot fail.
    Url::parse(DEFAULT_ENDPOINT).unwrap_or_else(|_| unreachable!("default endpoint is valid"))
}

/// Read an env var, treating unset and empty as absent.
fn optional_env(key: &str) -> Option<String> {
    match std::env::var(key) {
        Ok(v) if !v.trim().is_empty() => Some(v),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_public_endpoint() {
        let config = ListingsConfig::default();
        assert_eq!(config.endpoint.as_str(), DEFAULT_ENDPOINT);
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn with_endpoint_overrides_url() {
        let url = Url::parse("http://127.0.0.1:9000/data").unwrap();
        let config = ListingsConfig::with_endpoint(url.clone());
        assert_eq!(config.endpoint, url);
    }
}
