//! Fleet Server host endpoints.

use reqwest::Client;

use crate::auth::Credentials;
use crate::endpoints::{KBN_XSRF, parse_json, send, send_allow_missing};
use crate::error::Result;
use crate::models::{
    CreateServerHostRequest, FleetServerHost, ItemEnvelope, UpdateServerHostRequest,
};

/// Register a Fleet Server host.
pub async fn create_server_host(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
    request: &CreateServerHostRequest,
) -> Result<FleetServerHost> {
    let url = format!("{}/api/fleet/fleet_server_hosts", base_url);

    let builder = credentials
        .apply(client.post(&url))
        .header(KBN_XSRF.0, KBN_XSRF.1)
        .json(request);
    let response = send(builder).await?;

    let envelope: ItemEnvelope<FleetServerHost> =
        parse_json(response, "server host create response").await?;
    Ok(envelope.item)
}

/// Get a Fleet Server host by id. Returns `None` when the host no longer
/// exists.
pub async fn get_server_host(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
    id: &str,
) -> Result<Option<FleetServerHost>> {
    let url = format!("{}/api/fleet/fleet_server_hosts/{}", base_url, id);

    let builder = credentials
        .apply(client.get(&url))
        .header(KBN_XSRF.0, KBN_XSRF.1);
    let Some(response) = send_allow_missing(builder).await? else {
        return Ok(None);
    };

    let envelope: ItemEnvelope<FleetServerHost> =
        parse_json(response, "server host get response").await?;
    Ok(Some(envelope.item))
}

/// Update a Fleet Server host.
pub async fn update_server_host(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
    id: &str,
    request: &UpdateServerHostRequest,
) -> Result<FleetServerHost> {
    let url = format!("{}/api/fleet/fleet_server_hosts/{}", base_url, id);

    let builder = credentials
        .apply(client.put(&url))
        .header(KBN_XSRF.0, KBN_XSRF.1)
        .json(request);
    let response = send(builder).await?;

    let envelope: ItemEnvelope<FleetServerHost> =
        parse_json(response, "server host update response").await?;
    Ok(envelope.item)
}

/// Delete a Fleet Server host.
pub async fn delete_server_host(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
    id: &str,
) -> Result<()> {
    let url = format!("{}/api/fleet/fleet_server_hosts/{}", base_url, id);

    let builder = credentials
        .apply(client.delete(&url))
        .header(KBN_XSRF.0, KBN_XSRF.1);
    send(builder).await?;

    Ok(())
}
