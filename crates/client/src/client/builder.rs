//! Client builder for constructing [`FleetClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Validating required configuration (base_url, credentials)
//! - Normalizing the base URL (removing trailing slashes)
//! - Configuring the underlying HTTP client (timeout, TLS verification)
//!
//! # Invariants
//! - `base_url` and `credentials` are required fields.
//! - The base URL never carries a trailing slash after `build()`.
//! - `skip_verify` only affects HTTPS connections; for HTTP URLs a warning
//!   is logged.

use std::time::Duration;

use tracing::warn;

use crate::auth::Credentials;
use crate::client::FleetClient;
use crate::error::{FleetError, Result};
use fleet_config::constants::DEFAULT_TIMEOUT_SECS;
use fleet_config::{AuthStrategy, Config};

/// Builder for creating a new [`FleetClient`].
pub struct FleetClientBuilder {
    base_url: Option<String>,
    credentials: Option<Credentials>,
    skip_verify: bool,
    timeout: Duration,
}

impl Default for FleetClientBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            credentials: None,
            skip_verify: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl FleetClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL of the Kibana server hosting the Fleet API.
    ///
    /// This should include the protocol and port, e.g.
    /// `https://localhost:5601`. Trailing slashes are removed.
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the credentials attached to every request.
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set whether to skip TLS certificate verification.
    ///
    /// # Security Warning
    /// Only use this in development or testing environments.
    pub fn skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = skip;
        self
    }

    /// Set the request timeout. Default is 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Create a builder pre-populated from a loaded configuration.
    pub fn from_config(config: &Config) -> Self {
        let credentials = match &config.auth.strategy {
            AuthStrategy::ApiKey { key } => Credentials::ApiKey { key: key.clone() },
            AuthStrategy::Basic { username, password } => Credentials::Basic {
                username: username.clone(),
                password: password.clone(),
            },
        };

        Self::new()
            .base_url(config.connection.base_url.clone())
            .credentials(credentials)
            .skip_verify(config.connection.skip_verify)
            .timeout(config.connection.timeout)
    }

    /// Build the [`FleetClient`].
    pub fn build(self) -> Result<FleetClient> {
        let base_url = self
            .base_url
            .ok_or_else(|| FleetError::InvalidUrl("base_url is required".to_string()))?;
        let base_url = base_url.trim_end_matches('/').to_string();

        let credentials = self
            .credentials
            .ok_or_else(|| FleetError::InvalidUrl("credentials are required".to_string()))?;

        let mut http_builder = reqwest::Client::builder().timeout(self.timeout);
        if self.skip_verify {
            if base_url.starts_with("https://") {
                warn!("TLS certificate verification is disabled");
                http_builder = http_builder.danger_accept_invalid_certs(true);
            } else {
                warn!("skip_verify has no effect on non-HTTPS URLs");
            }
        }
        let http = http_builder.build()?;

        Ok(FleetClient {
            http,
            base_url,
            credentials,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::SecretString;

    #[test]
    fn test_from_config_maps_auth_strategy() {
        let config = Config::with_api_key(
            "https://kibana.example.com:5601/",
            SecretString::new("abc".to_string().into()),
        );

        let client = FleetClientBuilder::from_config(&config).build().unwrap();
        assert_eq!(client.base_url(), "https://kibana.example.com:5601");
        assert!(matches!(client.credentials, Credentials::ApiKey { .. }));
    }

    #[test]
    fn test_missing_credentials_is_an_error() {
        let result = FleetClientBuilder::new()
            .base_url("http://localhost:5601".to_string())
            .build();
        assert!(result.is_err());
    }
}
