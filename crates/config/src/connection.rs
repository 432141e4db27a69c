//! Connection configuration types for the Fleet toolkit.
//!
//! Responsibilities:
//! - Define connection settings (base URL, TLS verification, timeout).
//! - Define the main `Config` structure combining connection and auth.
//!
//! Does NOT handle:
//! - Loading from environment (see `loader`).
//! - Actual network connections (see the client crate).
//!
//! Invariants:
//! - Duration fields are serialized as seconds (integers).
//! - `Config::default()` targets a local Kibana (http://localhost:5601).

use std::time::Duration;

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use crate::auth::{AuthConfig, AuthStrategy};
use crate::constants::{DEFAULT_KIBANA_PORT, DEFAULT_TIMEOUT_SECS};

/// Module for serializing Duration as seconds (integer).
mod duration_seconds {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

/// Connection settings for the Kibana server hosting the Fleet API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// Base URL of the Kibana server (e.g. https://localhost:5601).
    pub base_url: String,
    /// Whether to skip TLS verification (for self-signed certificates).
    pub skip_verify: bool,
    /// Request timeout (serialized as seconds).
    #[serde(with = "duration_seconds")]
    pub timeout: Duration,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            base_url: format!("http://localhost:{}", DEFAULT_KIBANA_PORT),
            skip_verify: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Top-level Fleet toolkit configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub connection: ConnectionConfig,
    pub auth: AuthConfig,
}

impl Config {
    /// Convenience constructor for API-key authentication.
    pub fn with_api_key(base_url: impl Into<String>, key: SecretString) -> Self {
        Self {
            connection: ConnectionConfig {
                base_url: base_url.into(),
                ..ConnectionConfig::default()
            },
            auth: AuthConfig {
                strategy: AuthStrategy::ApiKey { key },
            },
        }
    }

    /// Convenience constructor for basic authentication.
    pub fn with_basic_auth(
        base_url: impl Into<String>,
        username: impl Into<String>,
        password: SecretString,
    ) -> Self {
        Self {
            connection: ConnectionConfig {
                base_url: base_url.into(),
                ..ConnectionConfig::default()
            },
            auth: AuthConfig {
                strategy: AuthStrategy::Basic {
                    username: username.into(),
                    password,
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_connection_targets_local_kibana() {
        let conn = ConnectionConfig::default();
        assert_eq!(conn.base_url, "http://localhost:5601");
        assert!(!conn.skip_verify);
        assert_eq!(conn.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }

    #[test]
    fn test_timeout_serialized_as_seconds() {
        let conn = ConnectionConfig {
            base_url: "https://kibana.example.com".to_string(),
            skip_verify: false,
            timeout: Duration::from_secs(45),
        };

        let json = serde_json::to_value(&conn).unwrap();
        assert_eq!(json["timeout"], 45);

        let back: ConnectionConfig = serde_json::from_value(json).unwrap();
        assert_eq!(back.timeout, Duration::from_secs(45));
    }
}
