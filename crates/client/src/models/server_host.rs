//! Fleet Server host models.

use serde::{Deserialize, Serialize};

/// Fleet Server host entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FleetServerHost {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    pub host_urls: Vec<String>,
    #[serde(default)]
    pub is_default: bool,
    #[serde(default)]
    pub is_preconfigured: bool,
}

/// Request body for `POST /api/fleet/fleet_server_hosts`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateServerHostRequest {
    pub name: String,
    pub host_urls: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_default: Option<bool>,
}

/// Request body for `PUT /api/fleet/fleet_server_hosts/{itemId}`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateServerHostRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_urls: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_default: Option<bool>,
}
