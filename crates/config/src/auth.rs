//! Authentication types for Fleet toolkit configuration.
//!
//! Responsibilities:
//! - Define authentication strategies (API key, basic auth).
//! - Keep secret material behind `secrecy::SecretString`.
//!
//! Does NOT handle:
//! - Attaching credentials to HTTP requests (see the client crate).
//!
//! Invariants:
//! - Secret values never appear in `Debug` output.
//! - Serialization includes secrets for config file persistence; secrecy is
//!   for runtime safety, not persistence safety.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// Module for serializing SecretString as strings.
mod secret_string {
    use secrecy::{ExposeSecret, SecretString};
    use serde::{Deserialize as DeserializeTrait, Serialize as SerializeTrait};
    use serde::{Deserializer, Serializer};

    pub fn serialize<S>(secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        secret.expose_secret().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(SecretString::new(s.into()))
    }
}

/// Strategy for authenticating against the Kibana Fleet API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AuthStrategy {
    /// Kibana API key (`Authorization: ApiKey <key>`).
    #[serde(rename = "api_key")]
    ApiKey {
        #[serde(with = "secret_string")]
        key: SecretString,
    },
    /// HTTP basic authentication.
    #[serde(rename = "basic")]
    Basic {
        username: String,
        #[serde(with = "secret_string")]
        password: SecretString,
    },
}

/// Authentication configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// The authentication strategy to use.
    #[serde(flatten)]
    pub strategy: AuthStrategy,
}
