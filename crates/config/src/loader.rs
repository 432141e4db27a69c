//! Environment-variable loading for Fleet toolkit configuration.
//!
//! Responsibilities:
//! - Read connection and auth settings from the `FLEET_*` environment
//!   variables, after an optional `.env` load.
//! - Validate values (URL shape, timeout bounds) before building a `Config`.
//!
//! Does NOT handle:
//! - Config file persistence (there is none; the environment is the source
//!   of truth).
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - An API key takes precedence when both an API key and basic credentials
//!   are present.

use std::time::Duration;

use secrecy::SecretString;
use thiserror::Error;
use url::Url;

use crate::auth::{AuthConfig, AuthStrategy};
use crate::connection::{Config, ConnectionConfig};
use crate::constants::{
    ENV_API_KEY, ENV_BASE_URL, ENV_PASSWORD, ENV_SKIP_VERIFY, ENV_TIMEOUT_SECS, ENV_USERNAME,
    MAX_TIMEOUT_SECS,
};

/// Errors raised while assembling a [`Config`] from the environment.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required environment variable is missing.
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    /// A variable is present but holds an unusable value.
    #[error("Invalid value for {var}: {message}")]
    InvalidValue { var: &'static str, message: String },

    /// No usable authentication material was found.
    #[error("No credentials configured: set {ENV_API_KEY} or {ENV_USERNAME}/{ENV_PASSWORD}")]
    MissingCredentials,
}

/// Read an environment variable, returning None if unset, empty, or
/// whitespace-only. Returned values are trimmed.
fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

impl Config {
    /// Build a configuration from the `FLEET_*` environment variables.
    ///
    /// A `.env` file in the working directory is honored when present;
    /// real environment variables win over `.env` entries.
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Err(err) = dotenvy::dotenv() {
            if !err.not_found() {
                tracing::warn!("Failed to load .env file: {}", err);
            }
        }

        let base_url = env_var_or_none(ENV_BASE_URL).ok_or(ConfigError::MissingVar(ENV_BASE_URL))?;
        Url::parse(&base_url).map_err(|e| ConfigError::InvalidValue {
            var: ENV_BASE_URL,
            message: e.to_string(),
        })?;

        let mut connection = ConnectionConfig {
            base_url,
            ..ConnectionConfig::default()
        };

        if let Some(skip) = env_var_or_none(ENV_SKIP_VERIFY) {
            connection.skip_verify = skip.parse().map_err(|_| ConfigError::InvalidValue {
                var: ENV_SKIP_VERIFY,
                message: "must be true or false".to_string(),
            })?;
        }
        if let Some(timeout) = env_var_or_none(ENV_TIMEOUT_SECS) {
            let secs: u64 = timeout.parse().map_err(|_| ConfigError::InvalidValue {
                var: ENV_TIMEOUT_SECS,
                message: "must be a number of seconds".to_string(),
            })?;
            if secs == 0 || secs > MAX_TIMEOUT_SECS {
                return Err(ConfigError::InvalidValue {
                    var: ENV_TIMEOUT_SECS,
                    message: format!("must be between 1 and {}", MAX_TIMEOUT_SECS),
                });
            }
            connection.timeout = Duration::from_secs(secs);
        }

        let strategy = match (
            env_var_or_none(ENV_API_KEY),
            env_var_or_none(ENV_USERNAME),
            env_var_or_none(ENV_PASSWORD),
        ) {
            (Some(key), _, _) => AuthStrategy::ApiKey {
                key: SecretString::new(key.into()),
            },
            (None, Some(username), Some(password)) => AuthStrategy::Basic {
                username,
                password: SecretString::new(password.into()),
            },
            _ => return Err(ConfigError::MissingCredentials),
        };

        Ok(Self {
            connection,
            auth: AuthConfig { strategy },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_env_with_api_key() {
        temp_env::with_vars(
            [
                (ENV_BASE_URL, Some("https://kibana.example.com:5601")),
                (ENV_API_KEY, Some("abc123")),
                (ENV_USERNAME, None),
                (ENV_PASSWORD, None),
                (ENV_SKIP_VERIFY, None),
                (ENV_TIMEOUT_SECS, None),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.connection.base_url, "https://kibana.example.com:5601");
                assert!(matches!(
                    config.auth.strategy,
                    AuthStrategy::ApiKey { .. }
                ));
            },
        );
    }

    #[test]
    fn test_from_env_prefers_api_key_over_basic() {
        temp_env::with_vars(
            [
                (ENV_BASE_URL, Some("http://localhost:5601")),
                (ENV_API_KEY, Some("abc123")),
                (ENV_USERNAME, Some("elastic")),
                (ENV_PASSWORD, Some("changeme")),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert!(matches!(
                    config.auth.strategy,
                    AuthStrategy::ApiKey { .. }
                ));
            },
        );
    }

    #[test]
    fn test_from_env_missing_base_url() {
        temp_env::with_vars(
            [
                (ENV_BASE_URL, None::<&str>),
                (ENV_API_KEY, Some("abc123")),
            ],
            || {
                let err = Config::from_env().unwrap_err();
                assert!(matches!(err, ConfigError::MissingVar(ENV_BASE_URL)));
            },
        );
    }

    #[test]
    fn test_from_env_rejects_invalid_url() {
        temp_env::with_vars(
            [
                (ENV_BASE_URL, Some("not a url")),
                (ENV_API_KEY, Some("abc123")),
            ],
            || {
                let err = Config::from_env().unwrap_err();
                assert!(matches!(err, ConfigError::InvalidValue { .. }));
            },
        );
    }

    #[test]
    fn test_from_env_missing_credentials() {
        temp_env::with_vars(
            [
                (ENV_BASE_URL, Some("http://localhost:5601")),
                (ENV_API_KEY, None::<&str>),
                (ENV_USERNAME, None),
                (ENV_PASSWORD, None),
            ],
            || {
                let err = Config::from_env().unwrap_err();
                assert!(matches!(err, ConfigError::MissingCredentials));
            },
        );
    }

    #[test]
    fn test_from_env_rejects_zero_timeout() {
        temp_env::with_vars(
            [
                (ENV_BASE_URL, Some("http://localhost:5601")),
                (ENV_API_KEY, Some("abc123")),
                (ENV_TIMEOUT_SECS, Some("0")),
            ],
            || {
                let err = Config::from_env().unwrap_err();
                assert!(matches!(err, ConfigError::InvalidValue { .. }));
            },
        );
    }
}
