//! Credential handling for Fleet API requests.
//!
//! Kibana accepts either an API key (`Authorization: ApiKey <key>`) or HTTP
//! basic authentication. Secret material is kept behind
//! [`secrecy::SecretString`] so it never leaks through `Debug` output.

use reqwest::RequestBuilder;
use reqwest::header::AUTHORIZATION;
use secrecy::{ExposeSecret, SecretString};

/// Credentials attached to every Fleet API request.
#[derive(Debug, Clone)]
pub enum Credentials {
    /// Kibana API key.
    ApiKey { key: SecretString },
    /// HTTP basic authentication.
    Basic {
        username: String,
        password: SecretString,
    },
}

impl Credentials {
    /// API-key credentials.
    pub fn api_key(key: SecretString) -> Self {
        Self::ApiKey { key }
    }

    /// Basic-auth credentials.
    pub fn basic(username: impl Into<String>, password: SecretString) -> Self {
        Self::Basic {
            username: username.into(),
            password,
        }
    }

    /// Attach the `Authorization` header to a request.
    pub(crate) fn apply(&self, builder: RequestBuilder) -> RequestBuilder {
        match self {
            Self::ApiKey { key } => builder.header(
                AUTHORIZATION,
                format!("ApiKey {}", key.expose_secret()),
            ),
            Self::Basic { username, password } => {
                builder.basic_auth(username, Some(password.expose_secret()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_does_not_expose_api_key() {
        let credentials = Credentials::api_key(SecretString::new("super-secret".to_string().into()));
        let debug_output = format!("{:?}", credentials);
        assert!(!debug_output.contains("super-secret"));
    }

    #[test]
    fn test_debug_does_not_expose_password() {
        let credentials = Credentials::basic(
            "elastic",
            SecretString::new("hunter2".to_string().into()),
        );
        let debug_output = format!("{:?}", credentials);
        assert!(!debug_output.contains("hunter2"));
        assert!(debug_output.contains("elastic"));
    }
}
