//! HTTP transport driven through the router without binding a socket

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use serde_json::{json, Value};
use soloflow_mcp::mcp::{router, McpServer};
use soloflow_mcp::DocumentStore;
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;

async fn post_mcp(server: &Arc<McpServer>, body: Value) -> (StatusCode, Value) {
    let request = Request::post("/mcp")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = router(Arc::clone(server)).oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

#[tokio::test]
async fn test_update_and_read_over_http() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().to_string_lossy().to_string();
    let server = Arc::new(McpServer::new(DocumentStore::new()));

    let (status, response) = post_mcp(
        &server,
        json!({
            "jsonrpc": "2.0", "id": 1, "method": "tools/call",
            "params": {"name": "update", "arguments": {"projectRoot": root, "type": "overview", "content": "# Hello World\n"}}
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        response["result"]["content"][0]["text"],
        "Document updated successfully: true"
    );

    let (_, response) = post_mcp(
        &server,
        json!({
            "jsonrpc": "2.0", "id": 2, "method": "tools/call",
            "params": {"name": "list", "arguments": {"projectRoot": root}}
        }),
    )
    .await;
    let text = response["result"]["content"][0]["text"].as_str().unwrap();
    let listed: Value = serde_json::from_str(text).unwrap();
    assert_eq!(listed[0]["title"], "Hello World");
}

#[tokio::test]
async fn test_notification_gets_202() {
    let server = Arc::new(McpServer::default());
    let (status, body) = post_mcp(
        &server,
        json!({"jsonrpc": "2.0", "method": "notifications/initialized"}),
    )
    .await;
    assert_eq!(status, StatusCode::ACCEPTED);
    assert_eq!(body, Value::Null);
}

#[tokio::test]
async fn test_malformed_body_is_parse_error() {
    let server = Arc::new(McpServer::default());
    let request = Request::post("/mcp").body(Body::from("not json")).unwrap();

    let response = router(server).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["error"]["code"], -32700);
}

#[tokio::test]
async fn test_health_reports_version() {
    let server = Arc::new(McpServer::default());
    let request = Request::get("/health").body(Body::empty()).unwrap();

    let response = router(server).oneshot(request).await.unwrap();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}
