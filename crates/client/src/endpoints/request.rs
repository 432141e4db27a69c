//! One-shot request dispatch for Fleet endpoints.
//!
//! Every Fleet operation is a single HTTP request: there is no retry or
//! backoff at this layer, and failures surface to the caller immediately.
//! This module centralizes status handling, error-envelope decoding, and
//! the 404-means-gone rule for read operations.

use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{FleetError, Result};
use crate::models::ApiErrorBody;

/// Header Kibana requires on every API request.
pub(crate) const KBN_XSRF: (&str, &str) = ("kbn-xsrf", "fleet-client");

/// Send the request and require a 2xx response.
pub(crate) async fn send(builder: RequestBuilder) -> Result<Response> {
    let response = builder.send().await?;
    if response.status().is_success() {
        return Ok(response);
    }
    Err(error_from_response(response).await)
}

/// Send the request, mapping 404 to `Ok(None)` so callers can treat a
/// vanished resource as "clear local identity" rather than a failure.
pub(crate) async fn send_allow_missing(builder: RequestBuilder) -> Result<Option<Response>> {
    let response = builder.send().await?;
    let status = response.status();
    if status.is_success() {
        return Ok(Some(response));
    }
    if status == StatusCode::NOT_FOUND {
        debug!(url = %response.url(), "Resource no longer exists");
        return Ok(None);
    }
    Err(error_from_response(response).await)
}

/// Build an [`FleetError::Api`] from a non-2xx response, preferring the
/// decoded error envelope over the raw body.
async fn error_from_response(response: Response) -> FleetError {
    let status = response.status().as_u16();
    let url = response.url().to_string();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Could not read error response body".to_string());

    let message = serde_json::from_str::<ApiErrorBody>(&body)
        .ok()
        .and_then(|envelope| envelope.summary())
        .unwrap_or(body);

    FleetError::Api {
        status,
        url,
        message,
    }
}

/// Decode a JSON response body, attaching `context` to decode failures.
pub(crate) async fn parse_json<T: DeserializeOwned>(response: Response, context: &str) -> Result<T> {
    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|e| FleetError::decode(context, e))
}
