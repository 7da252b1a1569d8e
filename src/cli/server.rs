//! Server commands: run the MCP server over stdio or HTTP

use crate::config::ServerConfig;
use crate::mcp::{self, McpServer};
use crate::Result;
use std::sync::Arc;

/// Serve MCP over stdin/stdout until EOF or `shutdown`
pub async fn run_stdio(config: &ServerConfig) -> Result<()> {
    let server = McpServer::new(config.document_store());
    tracing::info!(
        allowed_roots = config.allowed_roots.len(),
        "starting stdio transport"
    );
    server.run().await
}

/// Serve MCP over HTTP; flags override the configured host and port
pub async fn run_http(config: &ServerConfig, host: Option<String>, port: Option<u16>) -> Result<()> {
    let host = host.unwrap_or_else(|| config.http.host.clone());
    let port = port.unwrap_or(config.http.port);

    let server = Arc::new(McpServer::new(config.document_store()));
    mcp::start_server(&host, port, server).await
}
