//! Integration package (EPM) models.

use serde::{Deserialize, Serialize};

/// Summary of an integration package in the registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageInfo {
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub format_version: Option<String>,
    #[serde(default)]
    pub release: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// One asset touched by a package install or uninstall.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageAsset {
    pub id: String,
    #[serde(rename = "type")]
    pub asset_type: String,
}

/// Request body for package install and uninstall operations.
#[derive(Debug, Clone, Default, Serialize)]
pub struct InstallPackageRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force: Option<bool>,
}
