//! Integration package (EPM) endpoints.

use reqwest::Client;

use crate::auth::Credentials;
use crate::endpoints::{KBN_XSRF, parse_json, send, send_allow_missing};
use crate::error::Result;
use crate::models::{
    InstallPackageRequest, ItemEnvelope, ListEnvelope, PackageAsset, PackageInfo,
};

/// Get registry information for a package version. Returns `None` when the
/// package is unknown.
pub async fn get_package_info(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
    name: &str,
    version: &str,
) -> Result<Option<PackageInfo>> {
    let url = format!("{}/api/fleet/epm/packages/{}/{}", base_url, name, version);

    let builder = credentials
        .apply(client.get(&url))
        .header(KBN_XSRF.0, KBN_XSRF.1);
    let Some(response) = send_allow_missing(builder).await? else {
        return Ok(None);
    };

    let envelope: ItemEnvelope<PackageInfo> =
        parse_json(response, "package info response").await?;
    Ok(Some(envelope.item))
}

/// Install a package version, returning the assets that were set up.
pub async fn install_package(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
    name: &str,
    version: &str,
    force: bool,
) -> Result<Vec<PackageAsset>> {
    let url = format!("{}/api/fleet/epm/packages/{}/{}", base_url, name, version);
    let request = InstallPackageRequest {
        force: force.then_some(true),
    };

    let builder = credentials
        .apply(client.post(&url))
        .header(KBN_XSRF.0, KBN_XSRF.1)
        .json(&request);
    let response = send(builder).await?;

    let envelope: ListEnvelope<PackageAsset> =
        parse_json(response, "package install response").await?;
    Ok(envelope.items)
}

/// Uninstall a package version, returning the assets that were removed.
pub async fn uninstall_package(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
    name: &str,
    version: &str,
    force: bool,
) -> Result<Vec<PackageAsset>> {
    let url = format!("{}/api/fleet/epm/packages/{}/{}", base_url, name, version);
    let request = InstallPackageRequest {
        force: force.then_some(true),
    };

    let builder = credentials
        .apply(client.delete(&url))
        .header(KBN_XSRF.0, KBN_XSRF.1)
        .json(&request);
    let response = send(builder).await?;

    let envelope: ListEnvelope<PackageAsset> =
        parse_json(response, "package uninstall response").await?;
    Ok(envelope.items)
}
