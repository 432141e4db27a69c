//! Integration package (EPM) endpoint tests.

mod common;

use common::*;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};

#[tokio::test]
async fn test_get_package_info() {
    let mock_server = MockServer::start().await;

    let fixture = load_fixture("epm/package_info.json");

    Mock::given(method("GET"))
        .and(path("/api/fleet/epm/packages/winlog/1.5.0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&fixture))
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let info = endpoints::get_package_info(
        &client,
        &mock_server.uri(),
        &test_credentials(),
        "winlog",
        "1.5.0",
    )
    .await
    .unwrap()
    .expect("package exists");

    assert_eq!(info.name, "winlog");
    assert_eq!(info.title.as_deref(), Some("Windows Event Logs"));
    assert_eq!(info.status.as_deref(), Some("not_installed"));
}

#[tokio::test]
async fn test_get_package_info_unknown_package() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/fleet/epm/packages/nope/1.0.0"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "statusCode": 404,
            "error": "Not Found",
            "message": "nope-1.0.0 not found"
        })))
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let info = endpoints::get_package_info(
        &client,
        &mock_server.uri(),
        &test_credentials(),
        "nope",
        "1.0.0",
    )
    .await
    .unwrap();

    assert!(info.is_none());
}

#[tokio::test]
async fn test_install_package_with_force() {
    let mock_server = MockServer::start().await;

    let fixture = load_fixture("epm/install.json");

    Mock::given(method("POST"))
        .and(path("/api/fleet/epm/packages/winlog/1.5.0"))
        .and(body_json(json!({"force": true})))
        .respond_with(ResponseTemplate::new(200).set_body_json(&fixture))
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let assets = endpoints::install_package(
        &client,
        &mock_server.uri(),
        &test_credentials(),
        "winlog",
        "1.5.0",
        true,
    )
    .await
    .unwrap();

    assert_eq!(assets.len(), 3);
    assert_eq!(assets[0].asset_type, "index_template");
}

#[tokio::test]
async fn test_uninstall_package() {
    let mock_server = MockServer::start().await;

    let fixture = load_fixture("epm/install.json");

    Mock::given(method("DELETE"))
        .and(path("/api/fleet/epm/packages/winlog/1.5.0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&fixture))
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let assets = endpoints::uninstall_package(
        &client,
        &mock_server.uri(),
        &test_credentials(),
        "winlog",
        "1.5.0",
        false,
    )
    .await
    .unwrap();

    assert_eq!(assets.len(), 3);
}
