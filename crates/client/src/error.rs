//! Error types for the Fleet client.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, FleetError>;

/// Errors that can occur during Fleet client operations.
///
/// HTTP 404 on read operations is not represented here: read endpoints
/// return `Ok(None)` so callers can treat a vanished resource as a signal
/// to clear local identity rather than as a failure.
#[derive(Error, Debug)]
pub enum FleetError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response from the Fleet API.
    #[error("API error ({status}) at {url}: {message}")]
    Api {
        status: u16,
        url: String,
        message: String,
    },

    /// Malformed JSON in a variables attribute or an API body.
    #[error("Failed to decode {context}: {source}")]
    Decode {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// Invalid base URL or path segment.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Structurally unexpected response from the API.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

impl FleetError {
    /// Construct a [`FleetError::Decode`] with location context, e.g.
    /// `input.2.stream.0.vars_json`.
    pub fn decode(context: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Decode {
            context: context.into(),
            source,
        }
    }
}
