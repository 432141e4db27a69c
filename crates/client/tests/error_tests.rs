//! Error handling tests.
//!
//! # Invariants
//! - Error envelope fields are concatenated into `"<error> (<status>): <message>"`
//! - A non-JSON error body falls back to the raw text
//! - Errors surface immediately; there is exactly one request per call

mod common;

use common::*;
use fleet_client::FleetError;
use serde_json::json;
use wiremock::matchers::{method, path};

#[tokio::test]
async fn test_api_error_uses_decoded_envelope() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/fleet/agent_policies/ap-1"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({
            "error": "Conflict",
            "message": "agent policy is managed",
            "statusCode": 409
        })))
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let err =
        endpoints::get_agent_policy(&client, &mock_server.uri(), &test_credentials(), "ap-1")
            .await
            .unwrap_err();

    match err {
        FleetError::Api {
            status, message, ..
        } => {
            assert_eq!(status, 409);
            assert_eq!(message, "Conflict (409): agent policy is managed");
        }
        other => panic!("Expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_api_error_falls_back_to_raw_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/fleet/outputs/output-1"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let err = endpoints::get_output(&client, &mock_server.uri(), &test_credentials(), "output-1")
        .await
        .unwrap_err();

    match err {
        FleetError::Api {
            status, message, ..
        } => {
            assert_eq!(status, 500);
            assert_eq!(message, "upstream exploded");
        }
        other => panic!("Expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_empty_error_envelope_falls_back_to_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/fleet/outputs/output-1"))
        .respond_with(ResponseTemplate::new(503).set_body_json(json!({})))
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let err = endpoints::get_output(&client, &mock_server.uri(), &test_credentials(), "output-1")
        .await
        .unwrap_err();

    match err {
        FleetError::Api { message, .. } => assert_eq!(message, "{}"),
        other => panic!("Expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_failures_are_not_retried() {
    let mock_server = MockServer::start().await;

    // A 503 must produce exactly one request: this layer never retries.
    Mock::given(method("GET"))
        .and(path("/api/fleet/agent_policies/ap-1"))
        .respond_with(ResponseTemplate::new(503).set_body_json(json!({
            "error": "Service Unavailable",
            "statusCode": 503
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let result =
        endpoints::get_agent_policy(&client, &mock_server.uri(), &test_credentials(), "ap-1")
            .await;

    assert!(result.is_err());
}

#[tokio::test]
async fn test_malformed_success_body_is_a_decode_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/fleet/agent_policies/ap-1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let err =
        endpoints::get_agent_policy(&client, &mock_server.uri(), &test_credentials(), "ap-1")
            .await
            .unwrap_err();

    match err {
        FleetError::Decode { context, .. } => {
            assert!(context.contains("agent policy get response"));
        }
        other => panic!("Expected Decode error, got {other:?}"),
    }
}
