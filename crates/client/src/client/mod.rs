//! Fleet API client and per-resource API methods.
//!
//! [`FleetClient`] holds the HTTP client, base URL and credentials, and
//! exposes one method per Fleet operation. The methods are thin wrappers
//! over [`crate::endpoints`]; construction goes through
//! [`builder::FleetClientBuilder`], which takes every dependency
//! explicitly.
//!
//! # Submodules
//! - [`builder`]: client construction and configuration
//! - `agent_policies`, `package_policies`, `outputs`, `server_hosts`,
//!   `enrollment_tokens`, `epm`: per-resource API methods
//!
//! # Invariants
//! - One HTTP request per method call; no retries, no caching, no shared
//!   mutable state between calls.
//! - Read methods return `Ok(None)` for 404 instead of an error.

pub mod builder;

mod agent_policies;
mod enrollment_tokens;
mod epm;
mod outputs;
mod package_policies;
mod server_hosts;

use crate::auth::Credentials;

/// Kibana Fleet REST API client.
///
/// # Creating a client
///
/// ```rust,ignore
/// use fleet_client::{Credentials, FleetClient};
/// use secrecy::SecretString;
///
/// let client = FleetClient::builder()
///     .base_url("https://localhost:5601".to_string())
///     .credentials(Credentials::api_key(SecretString::new(
///         "my-key".to_string().into(),
///     )))
///     .build()?;
/// ```
#[derive(Debug)]
pub struct FleetClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) credentials: Credentials,
}

impl FleetClient {
    /// Create a new client builder.
    pub fn builder() -> builder::FleetClientBuilder {
        builder::FleetClientBuilder::new()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FleetError;
    use secrecy::SecretString;

    fn api_key() -> Credentials {
        Credentials::api_key(SecretString::new("test-key".to_string().into()))
    }

    #[test]
    fn test_builder_with_api_key() {
        let client = FleetClient::builder()
            .base_url("https://localhost:5601".to_string())
            .credentials(api_key())
            .build();

        let client = client.unwrap();
        assert_eq!(client.base_url(), "https://localhost:5601");
    }

    #[test]
    fn test_builder_missing_base_url() {
        let client = FleetClient::builder().credentials(api_key()).build();
        assert!(matches!(client.unwrap_err(), FleetError::InvalidUrl(_)));
    }

    #[test]
    fn test_builder_normalizes_base_url() {
        let client = FleetClient::builder()
            .base_url("https://localhost:5601/".to_string())
            .credentials(api_key())
            .build()
            .unwrap();

        assert_eq!(client.base_url(), "https://localhost:5601");
    }
}
