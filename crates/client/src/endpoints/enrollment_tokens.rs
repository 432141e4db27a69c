//! Enrollment token endpoints (read-only).

use reqwest::Client;

use crate::auth::Credentials;
use crate::endpoints::{KBN_XSRF, parse_json, send, send_allow_missing};
use crate::error::Result;
use crate::models::{EnrollmentToken, ItemEnvelope, ListEnvelope};

/// List all enrollment tokens.
pub async fn list_enrollment_tokens(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
) -> Result<Vec<EnrollmentToken>> {
    let url = format!("{}/api/fleet/enrollment_api_keys", base_url);

    let builder = credentials
        .apply(client.get(&url))
        .header(KBN_XSRF.0, KBN_XSRF.1);
    let response = send(builder).await?;

    let envelope: ListEnvelope<EnrollmentToken> =
        parse_json(response, "enrollment token list response").await?;
    Ok(envelope.items)
}

/// Get an enrollment token by id. Returns `None` when the token no longer
/// exists.
pub async fn get_enrollment_token(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
    id: &str,
) -> Result<Option<EnrollmentToken>> {
    let url = format!("{}/api/fleet/enrollment_api_keys/{}", base_url, id);

    let builder = credentials
        .apply(client.get(&url))
        .header(KBN_XSRF.0, KBN_XSRF.1);
    let Some(response) = send_allow_missing(builder).await? else {
        return Ok(None);
    };

    let envelope: ItemEnvelope<EnrollmentToken> =
        parse_json(response, "enrollment token get response").await?;
    Ok(Some(envelope.item))
}
