mod common;

use citations::config::ServiceKind;
use serde_json::{Value, json};

#[tokio::test]
async fn test_root_greets_without_key() {
    let (server, _store) = common::create_test_server(ServiceKind::All);

    let response = server.get("/").await;

    response.assert_status_ok();
    response.assert_json(&json!({ "message": "Hello World!" }));
}

#[tokio::test]
async fn test_root_is_mounted_by_every_service() {
    for service in [ServiceKind::Users, ServiceKind::Quotes, ServiceKind::Search] {
        let (server, _store) = common::create_test_server(service);

        server.get("/").await.assert_status_ok();
        server.get("/health").await.assert_status_ok();
    }
}

#[tokio::test]
async fn test_health_reports_store_ok() {
    let (server, _store) = common::create_test_server(ServiceKind::All);

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["store"]["status"], "ok");
    assert!(json["version"].is_string());
}

#[tokio::test]
async fn test_health_degraded_when_store_down() {
    let server = common::create_failing_server();

    let response = server.get("/health").await;

    response.assert_status_service_unavailable();

    let json = response.json::<Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["store"]["status"], "error");
}

#[tokio::test]
async fn test_openapi_document_is_public() {
    let (server, _store) = common::create_test_server(ServiceKind::All);

    let response = server.get("/openapi.json").await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert!(json["openapi"].as_str().unwrap().starts_with("3."));
    assert!(json["paths"]["/quotes/{id}"]["delete"].is_object());
    assert!(json["components"]["securitySchemes"]["admin_key"].is_object());
}

#[tokio::test]
async fn test_openapi_document_lists_only_mounted_routes() {
    let (server, _store) = common::create_test_server(ServiceKind::Users);

    let json = server.get("/openapi.json").await.json::<Value>();
    let paths = json["paths"].as_object().unwrap();

    assert!(paths.contains_key("/users"));
    assert!(paths.contains_key("/health"));
    assert!(!paths.contains_key("/quotes"));
    assert!(!paths.contains_key("/search"));
}
