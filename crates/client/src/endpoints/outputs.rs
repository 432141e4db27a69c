//! Output endpoints.

use reqwest::Client;

use crate::auth::Credentials;
use crate::endpoints::{KBN_XSRF, parse_json, send, send_allow_missing};
use crate::error::Result;
use crate::models::{CreateOutputRequest, ItemEnvelope, Output, UpdateOutputRequest};

/// Create an output.
pub async fn create_output(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
    request: &CreateOutputRequest,
) -> Result<Output> {
    let url = format!("{}/api/fleet/outputs", base_url);

    let builder = credentials
        .apply(client.post(&url))
        .header(KBN_XSRF.0, KBN_XSRF.1)
        .json(request);
    let response = send(builder).await?;

    let envelope: ItemEnvelope<Output> = parse_json(response, "output create response").await?;
    Ok(envelope.item)
}

/// Get an output by id. Returns `None` when the output no longer exists.
pub async fn get_output(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
    id: &str,
) -> Result<Option<Output>> {
    let url = format!("{}/api/fleet/outputs/{}", base_url, id);

    let builder = credentials
        .apply(client.get(&url))
        .header(KBN_XSRF.0, KBN_XSRF.1);
    let Some(response) = send_allow_missing(builder).await? else {
        return Ok(None);
    };

    let envelope: ItemEnvelope<Output> = parse_json(response, "output get response").await?;
    Ok(Some(envelope.item))
}

/// Update an output.
pub async fn update_output(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
    id: &str,
    request: &UpdateOutputRequest,
) -> Result<Output> {
    let url = format!("{}/api/fleet/outputs/{}", base_url, id);

    let builder = credentials
        .apply(client.put(&url))
        .header(KBN_XSRF.0, KBN_XSRF.1)
        .json(request);
    let response = send(builder).await?;

    let envelope: ItemEnvelope<Output> = parse_json(response, "output update response").await?;
    Ok(envelope.item)
}

/// Delete an output.
pub async fn delete_output(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
    id: &str,
) -> Result<()> {
    let url = format!("{}/api/fleet/outputs/{}", base_url, id);

    let builder = credentials
        .apply(client.delete(&url))
        .header(KBN_XSRF.0, KBN_XSRF.1);
    send(builder).await?;

    Ok(())
}
