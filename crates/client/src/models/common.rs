//! Envelope and error-body types shared across Fleet endpoints.

use serde::Deserialize;

/// Single-entity success envelope: `{"item": <entity>}`.
#[derive(Debug, Deserialize)]
pub struct ItemEnvelope<T> {
    pub item: T,
}

/// Collection success envelope: `{"items": [...], "total": n, ...}`.
///
/// Older Kibana versions use `list` instead of `items`; both are accepted.
#[derive(Debug, Deserialize)]
pub struct ListEnvelope<T> {
    #[serde(alias = "list")]
    pub items: Vec<T>,
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub page: Option<u64>,
    #[serde(default, rename = "perPage")]
    pub per_page: Option<u64>,
}

/// Error envelope returned by the Fleet API. Any of the fields may be
/// absent or null.
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, rename = "statusCode")]
    pub status_code: Option<u16>,
}

impl ApiErrorBody {
    /// Render the envelope as `"<error> (<statusCode>): <message>"`.
    ///
    /// `None` when every field is absent, so callers can fall back to the
    /// raw response body.
    pub fn summary(&self) -> Option<String> {
        if self.error.is_none() && self.message.is_none() && self.status_code.is_none() {
            return None;
        }
        Some(format!(
            "{} ({}): {}",
            self.error.as_deref().unwrap_or_default(),
            self.status_code.unwrap_or_default(),
            self.message.as_deref().unwrap_or_default()
        ))
    }
}
