//! Common test utilities for integration tests.
//!
//! Provides shared helpers and re-exports commonly used types for testing
//! the Fleet client against a wiremock server.

// Re-export test utilities from fleet-client
#[allow(unused_imports)]
pub use fleet_client::testing::load_fixture;

// Re-export commonly used types for test convenience
// These are used via `use common::*;` in test files
#[allow(unused_imports)]
pub use fleet_client::endpoints;
#[allow(unused_imports)]
pub use reqwest::Client;
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

use fleet_client::{Credentials, FleetClient};
use secrecy::SecretString;

/// API-key credentials used by every test.
pub fn test_credentials() -> Credentials {
    Credentials::api_key(SecretString::new("test-key".to_string().into()))
}

/// A [`FleetClient`] pointed at the given mock server URI.
#[allow(dead_code)]
pub fn test_client(uri: &str) -> FleetClient {
    FleetClient::builder()
        .base_url(uri.to_string())
        .credentials(test_credentials())
        .build()
        .expect("client builds against mock server")
}
