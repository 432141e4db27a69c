//! Agent policy endpoint tests.
//!
//! # Invariants
//! - Success envelopes are unwrapped to the bare entity
//! - A 404 on read yields `Ok(None)`, not an error
//! - Deletion goes through the `/delete` sub-path with the id in the body

mod common;

use common::*;
use fleet_client::models::{
    AgentPolicyCreateRequest, AgentPolicyUpdateRequest, MonitoringTarget,
};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};

#[tokio::test]
async fn test_create_agent_policy() {
    let mock_server = MockServer::start().await;

    let fixture = load_fixture("agent_policies/create.json");

    Mock::given(method("POST"))
        .and(path("/api/fleet/agent_policies"))
        .and(header("kbn-xsrf", "fleet-client"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&fixture))
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let request = AgentPolicyCreateRequest {
        name: "Windows hosts".to_string(),
        namespace: "default".to_string(),
        description: Some("Policy for the Windows fleet".to_string()),
        monitoring_enabled: Some(vec![MonitoringTarget::Logs]),
        ..Default::default()
    };

    let policy = endpoints::create_agent_policy(
        &client,
        &mock_server.uri(),
        &test_credentials(),
        &request,
    )
    .await
    .unwrap();

    assert_eq!(policy.id, "ap-1");
    assert_eq!(policy.name, "Windows hosts");
    assert_eq!(
        policy.monitoring_enabled,
        Some(vec![MonitoringTarget::Logs])
    );
}

#[tokio::test]
async fn test_get_agent_policy() {
    let mock_server = MockServer::start().await;

    let fixture = load_fixture("agent_policies/get.json");

    Mock::given(method("GET"))
        .and(path("/api/fleet/agent_policies/ap-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&fixture))
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let policy =
        endpoints::get_agent_policy(&client, &mock_server.uri(), &test_credentials(), "ap-1")
            .await
            .unwrap()
            .expect("policy exists");

    assert_eq!(policy.id, "ap-1");
    assert_eq!(policy.namespace, "default");
    assert_eq!(policy.revision, Some(3));
    assert_eq!(policy.updated_by.as_deref(), Some("elastic"));
}

#[tokio::test]
async fn test_get_agent_policy_not_found_clears_identity() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/fleet/agent_policies/gone"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": "Not Found",
            "message": "agent policy gone not found",
            "statusCode": 404
        })))
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let policy =
        endpoints::get_agent_policy(&client, &mock_server.uri(), &test_credentials(), "gone")
            .await
            .unwrap();

    assert!(policy.is_none());
}

#[tokio::test]
async fn test_update_agent_policy() {
    let mock_server = MockServer::start().await;

    let fixture = load_fixture("agent_policies/update.json");

    Mock::given(method("PUT"))
        .and(path("/api/fleet/agent_policies/ap-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&fixture))
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let request = AgentPolicyUpdateRequest {
        name: "Windows hosts (renamed)".to_string(),
        namespace: "default".to_string(),
        monitoring_enabled: Some(vec![MonitoringTarget::Logs, MonitoringTarget::Metrics]),
        ..Default::default()
    };

    let policy = endpoints::update_agent_policy(
        &client,
        &mock_server.uri(),
        &test_credentials(),
        "ap-1",
        &request,
    )
    .await
    .unwrap();

    assert_eq!(policy.name, "Windows hosts (renamed)");
    assert_eq!(policy.revision, Some(2));
}

#[tokio::test]
async fn test_delete_agent_policy_posts_id_in_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/fleet/agent_policies/delete"))
        .and(body_json(json!({"agentPolicyId": "ap-1"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "ap-1"})))
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let result =
        endpoints::delete_agent_policy(&client, &mock_server.uri(), &test_credentials(), "ap-1")
            .await;

    assert!(result.is_ok());
}
