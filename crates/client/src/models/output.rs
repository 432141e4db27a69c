//! Fleet output models.
//!
//! The wire API models outputs as a tagged union over the output type; the
//! `type` field is the discriminator and the remaining fields are shared
//! between the variants this client supports.

use serde::{Deserialize, Serialize};

/// Supported output types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputType {
    Elasticsearch,
    Logstash,
}

impl OutputType {
    /// The wire name of the type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Elasticsearch => "elasticsearch",
            Self::Logstash => "logstash",
        }
    }
}

/// Output entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Output {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub output_type: OutputType,
    #[serde(default)]
    pub hosts: Option<Vec<String>>,
    #[serde(default)]
    pub is_default: bool,
    #[serde(default)]
    pub is_default_monitoring: Option<bool>,
    #[serde(default)]
    pub ca_sha256: Option<String>,
    #[serde(default)]
    pub ca_trusted_fingerprint: Option<String>,
    #[serde(default)]
    pub config_yaml: Option<String>,
    #[serde(default)]
    pub proxy_id: Option<String>,
}

/// Request body for `POST /api/fleet/outputs`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateOutputRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub output_type: OutputType,
    pub hosts: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_default: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_default_monitoring: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ca_sha256: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ca_trusted_fingerprint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_yaml: Option<String>,
}

/// Request body for `PUT /api/fleet/outputs/{outputId}`.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateOutputRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub output_type: OutputType,
    pub hosts: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_default: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_default_monitoring: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ca_sha256: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ca_trusted_fingerprint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_yaml: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_type_round_trip() {
        let json = serde_json::to_string(&OutputType::Elasticsearch).unwrap();
        assert_eq!(json, r#""elasticsearch""#);
        let back: OutputType = serde_json::from_str(&json).unwrap();
        assert_eq!(back, OutputType::Elasticsearch);
    }

    #[test]
    fn test_unknown_output_type_is_rejected() {
        let result: Result<OutputType, _> = serde_json::from_str(r#""kafka""#);
        assert!(result.is_err());
    }
}
