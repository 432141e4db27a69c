//! Package policy endpoints.

use reqwest::Client;

use crate::auth::Credentials;
use crate::endpoints::{KBN_XSRF, parse_json, send, send_allow_missing};
use crate::error::Result;
use crate::models::{ItemEnvelope, PackagePolicy, PackagePolicyRequest};

/// Create a package policy.
pub async fn create_package_policy(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
    request: &PackagePolicyRequest,
) -> Result<PackagePolicy> {
    let url = format!("{}/api/fleet/package_policies", base_url);

    let builder = credentials
        .apply(client.post(&url))
        .header(KBN_XSRF.0, KBN_XSRF.1)
        .json(request);
    let response = send(builder).await?;

    let envelope: ItemEnvelope<PackagePolicy> =
        parse_json(response, "package policy create response").await?;
    Ok(envelope.item)
}

/// Get a package policy by id. Returns `None` when the policy no longer
/// exists.
pub async fn get_package_policy(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
    id: &str,
) -> Result<Option<PackagePolicy>> {
    let url = format!("{}/api/fleet/package_policies/{}", base_url, id);

    let builder = credentials
        .apply(client.get(&url))
        .header(KBN_XSRF.0, KBN_XSRF.1);
    let Some(response) = send_allow_missing(builder).await? else {
        return Ok(None);
    };

    let envelope: ItemEnvelope<PackagePolicy> =
        parse_json(response, "package policy get response").await?;
    Ok(Some(envelope.item))
}

/// Update a package policy. The full request object is sent; the API has no
/// partial-update semantics.
pub async fn update_package_policy(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
    id: &str,
    request: &PackagePolicyRequest,
) -> Result<PackagePolicy> {
    let url = format!("{}/api/fleet/package_policies/{}", base_url, id);

    let builder = credentials
        .apply(client.put(&url))
        .header(KBN_XSRF.0, KBN_XSRF.1)
        .json(request);
    let response = send(builder).await?;

    let envelope: ItemEnvelope<PackagePolicy> =
        parse_json(response, "package policy update response").await?;
    Ok(envelope.item)
}

/// Delete a package policy.
pub async fn delete_package_policy(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
    id: &str,
    force: bool,
) -> Result<()> {
    let url = format!("{}/api/fleet/package_policies/{}", base_url, id);

    let mut builder = credentials
        .apply(client.delete(&url))
        .header(KBN_XSRF.0, KBN_XSRF.1);
    if force {
        builder = builder.query(&[("force", "true")]);
    }
    send(builder).await?;

    Ok(())
}
