//! HTTP transport for the MCP server
//!
//! - `POST /mcp` takes one JSON-RPC message and answers with the response, or
//!   `202 Accepted` with an empty body for notifications
//! - `GET /health` reports status, server name and version

use crate::mcp::server::{JsonRpcResponse, McpServer, INTERNAL_ERROR, SERVER_NAME};
use crate::Result;
use anyhow::Context;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Body of `GET /health`
#[derive(Debug, Clone, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub server: &'static str,
    pub version: &'static str,
}

/// Build the router; exposed separately so it can be driven without a socket
pub fn router(server: Arc<McpServer>) -> Router {
    Router::new()
        .route("/mcp", post(handle_mcp_request))
        .route("/health", get(health_check))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(server)
}

/// Start the HTTP server and run until Ctrl-C
pub async fn start_server(host: &str, port: u16, server: Arc<McpServer>) -> Result<()> {
    let listener = bind(host, port).await?;
    let addr = listener.local_addr()?;
    tracing::info!(%addr, "HTTP server listening");
    eprintln!("✓ Server listening on http://{}", addr);
    eprintln!("  MCP endpoint: http://{}/mcp", addr);

    axum::serve(listener, router(server))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("HTTP server stopped");
    Ok(())
}

/// Bind `host:port`; `host` may be a name (`localhost`) or a bare IPv6 address (`::1`)
pub async fn bind(host: &str, port: u16) -> Result<TcpListener> {
    let host = host.trim_start_matches('[').trim_end_matches(']');
    TcpListener::bind((host, port))
        .await
        .with_context(|| format!("Failed to bind {}:{}", host, port))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for Ctrl-C");
    }
}

/// Health check endpoint
async fn health_check() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok",
        server: SERVER_NAME,
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// MCP JSON-RPC endpoint
///
/// Document operations are blocking filesystem work, so the handler runs on
/// the blocking pool.
async fn handle_mcp_request(State(server): State<Arc<McpServer>>, body: String) -> Response {
    let outcome = tokio::task::spawn_blocking(move || server.handle_message(&body)).await;

    match outcome {
        Ok(Some(response)) => Json(response).into_response(),
        // Notification - return HTTP 202 Accepted with empty body
        Ok(None) => (StatusCode::ACCEPTED, "").into_response(),
        Err(e) => {
            tracing::error!(error = %e, "request handler panicked");
            let response =
                JsonRpcResponse::error(Value::Null, INTERNAL_ERROR, format!("Internal error: {}", e));
            (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response()
        }
    }
}
