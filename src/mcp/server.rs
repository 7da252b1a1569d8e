//! MCP Server implementation using JSON-RPC 2.0
//!
//! The request handler is transport-agnostic: [`McpServer::handle_message`]
//! takes one JSON-RPC message and returns the response, or `None` for
//! notifications. The stdio transport lives here; HTTP is in `http_server`.
//!
//! Supported methods:
//! - `initialize` / `initialized` / `ping` / `shutdown`
//! - `tools/list`, `tools/call`
//! - `prompts/list`, `prompts/get`
//! - `completion/complete` for prompt arguments

use crate::prompts::{self, PromptError, PROMPTS};
use crate::services::DocumentStore;
use crate::Result;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::collections::HashMap;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};

use super::tools::ToolRegistry;

/// Name reported in `serverInfo` and on `/health`
pub const SERVER_NAME: &str = "soloflow-mcp-server";

/// Protocol revision answered to `initialize`
pub const PROTOCOL_VERSION: &str = "2024-11-05";

/// MCP Server for handling JSON-RPC requests
pub struct McpServer {
    tool_registry: ToolRegistry,
    store: DocumentStore,
}

/// JSON-RPC 2.0 Request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    pub method: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
}

/// JSON-RPC 2.0 Response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    pub id: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

/// JSON-RPC 2.0 Error
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

// JSON-RPC error codes
pub const PARSE_ERROR: i32 = -32700;
pub const INVALID_REQUEST: i32 = -32600;
pub const METHOD_NOT_FOUND: i32 = -32601;
pub const INVALID_PARAMS: i32 = -32602;
pub const INTERNAL_ERROR: i32 = -32603;

type MethodResult = std::result::Result<Value, (i32, String)>;

impl JsonRpcResponse {
    pub fn success(id: Value, result: Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: Some(result),
            error: None,
        }
    }

    pub fn error(id: Value, code: i32, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: None,
            error: Some(JsonRpcError {
                code,
                message: message.into(),
                data: None,
            }),
        }
    }
}

impl McpServer {
    /// Create a new MCP server backed by `store`
    pub fn new(store: DocumentStore) -> Self {
        Self {
            tool_registry: ToolRegistry::new(),
            store,
        }
    }

    pub fn store(&self) -> &DocumentStore {
        &self.store
    }

    /// Run the MCP server over stdin/stdout
    pub async fn run(&self) -> Result<()> {
        let stdin = BufReader::new(tokio::io::stdin());
        let stdout = tokio::io::stdout();
        self.serve(stdin, stdout).await
    }

    /// Serve line-delimited JSON-RPC from `reader`, answering on `writer`
    ///
    /// Returns when the reader reaches EOF or after answering `shutdown`.
    pub async fn serve<R, W>(&self, reader: R, mut writer: W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = reader.lines();
        tracing::info!("MCP server started, waiting for requests");

        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() {
                continue;
            }

            let is_shutdown = is_shutdown_request(&line);
            if let Some(response) = self.handle_message(&line) {
                let mut payload = serde_json::to_vec(&response)?;
                payload.push(b'\n');
                writer.write_all(&payload).await?;
                writer.flush().await?;
            }

            if is_shutdown {
                break;
            }
        }

        tracing::info!("MCP server stopped");
        Ok(())
    }

    /// Handle one raw JSON-RPC message
    pub fn handle_message(&self, message: &str) -> Option<JsonRpcResponse> {
        let request: JsonRpcRequest = match serde_json::from_str(message) {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!(error = %e, "unparseable JSON-RPC message");
                return Some(JsonRpcResponse::error(
                    Value::Null,
                    PARSE_ERROR,
                    format!("Parse error: {}", e),
                ));
            }
        };
        self.handle_request(&request)
    }

    /// Handle a parsed JSON-RPC request; `None` means no response is due
    pub fn handle_request(&self, request: &JsonRpcRequest) -> Option<JsonRpcResponse> {
        if request.jsonrpc != "2.0" {
            return Some(JsonRpcResponse::error(
                request.id.clone().unwrap_or(Value::Null),
                INVALID_REQUEST,
                "Invalid JSON-RPC version",
            ));
        }

        // Notifications carry no id and never get a response
        let Some(id) = request.id.clone() else {
            tracing::debug!(method = %request.method, "notification received");
            return None;
        };

        tracing::debug!(method = %request.method, "request received");
        let result = match request.method.as_str() {
            "initialize" => self.handle_initialize(),
            "ping" => Ok(json!({})),
            "tools/list" => self.handle_tools_list(),
            "tools/call" => self.handle_tools_call(&request.params),
            "prompts/list" => self.handle_prompts_list(),
            "prompts/get" => self.handle_prompts_get(&request.params),
            "completion/complete" => self.handle_completion(&request.params),
            "shutdown" => {
                tracing::info!("shutdown requested");
                Ok(json!({}))
            }
            _ => Err((
                METHOD_NOT_FOUND,
                format!("Method not found: {}", request.method),
            )),
        };

        Some(match result {
            Ok(value) => JsonRpcResponse::success(id, value),
            Err((code, message)) => JsonRpcResponse::error(id, code, message),
        })
    }

    fn handle_initialize(&self) -> MethodResult {
        Ok(json!({
            "protocolVersion": PROTOCOL_VERSION,
            "serverInfo": {
                "name": SERVER_NAME,
                "version": env!("CARGO_PKG_VERSION")
            },
            "capabilities": {
                "tools": {},
                "prompts": {},
                "completions": {}
            }
        }))
    }

    fn handle_tools_list(&self) -> MethodResult {
        let tools = self.tool_registry.list_tools();
        Ok(json!({ "tools": tools }))
    }

    fn handle_tools_call(&self, params: &Option<Value>) -> MethodResult {
        let params = params
            .as_ref()
            .ok_or((INVALID_PARAMS, "Missing params".to_string()))?;

        let name = params
            .get("name")
            .and_then(|v| v.as_str())
            .ok_or((INVALID_PARAMS, "Missing tool name".to_string()))?;

        let arguments = params.get("arguments").cloned().unwrap_or(json!({}));

        tracing::info!(tool = name, "calling tool");

        match self.tool_registry.call_tool(name, &arguments, &self.store) {
            Ok(result) => Ok(json!({
                "content": [{
                    "type": "text",
                    "text": result
                }]
            })),
            Err(e) => {
                tracing::warn!(tool = name, error = %e, "tool failed");
                Ok(json!({
                    "content": [{
                        "type": "text",
                        "text": format!("Error: {}", e)
                    }],
                    "isError": true
                }))
            }
        }
    }

    fn handle_prompts_list(&self) -> MethodResult {
        let prompts: Vec<Value> = PROMPTS
            .iter()
            .map(|p| {
                let arguments: Vec<Value> = p
                    .arguments
                    .iter()
                    .map(|a| {
                        json!({
                            "name": a.name,
                            "description": a.description,
                            "required": a.required
                        })
                    })
                    .collect();
                let category = prompts::category(p.category).map(|c| {
                    json!({
                        "key": c.key,
                        "title": c.title,
                        "description": c.description
                    })
                });
                json!({
                    "name": p.name,
                    "title": p.title,
                    "description": p.description,
                    "arguments": arguments,
                    "_meta": {
                        "path": p.path(),
                        "category": category
                    }
                })
            })
            .collect();
        Ok(json!({ "prompts": prompts }))
    }

    fn handle_prompts_get(&self, params: &Option<Value>) -> MethodResult {
        let params = params
            .as_ref()
            .ok_or((INVALID_PARAMS, "Missing params".to_string()))?;

        let name = params
            .get("name")
            .and_then(|v| v.as_str())
            .ok_or((INVALID_PARAMS, "Missing prompt name".to_string()))?;

        let prompt = prompts::find(name).ok_or_else(|| {
            (
                INVALID_PARAMS,
                PromptError::UnknownPrompt(name.to_string()).to_string(),
            )
        })?;

        let args: HashMap<String, String> = params
            .get("arguments")
            .and_then(|v| v.as_object())
            .map(|obj| {
                obj.iter()
                    .filter_map(|(k, v)| v.as_str().map(|s| (k.clone(), s.to_string())))
                    .collect()
            })
            .unwrap_or_default();

        let text = prompt
            .render(&args)
            .map_err(|e| (INVALID_PARAMS, e.to_string()))?;

        Ok(json!({
            "description": prompt.description,
            "messages": [{
                "role": "user",
                "content": {
                    "type": "text",
                    "text": text
                }
            }]
        }))
    }

    fn handle_completion(&self, params: &Option<Value>) -> MethodResult {
        let params = params
            .as_ref()
            .ok_or((INVALID_PARAMS, "Missing params".to_string()))?;

        let reference = params.get("ref").unwrap_or(&Value::Null);
        if reference.get("type").and_then(|v| v.as_str()) != Some("ref/prompt") {
            return Err((
                INVALID_PARAMS,
                "Completion is only supported for prompt arguments".to_string(),
            ));
        }

        let name = reference
            .get("name")
            .and_then(|v| v.as_str())
            .ok_or((INVALID_PARAMS, "Missing prompt name".to_string()))?;
        let prompt = prompts::find(name).ok_or_else(|| {
            (
                INVALID_PARAMS,
                PromptError::UnknownPrompt(name.to_string()).to_string(),
            )
        })?;

        let argument = params.get("argument").unwrap_or(&Value::Null);
        let arg_name = argument.get("name").and_then(|v| v.as_str()).unwrap_or("");
        let prefix = argument.get("value").and_then(|v| v.as_str()).unwrap_or("");

        let values = prompt.complete(arg_name, prefix);
        Ok(json!({
            "completion": {
                "values": values,
                "total": values.len(),
                "hasMore": false
            }
        }))
    }
}

impl Default for McpServer {
    fn default() -> Self {
        Self::new(DocumentStore::new())
    }
}

fn is_shutdown_request(line: &str) -> bool {
    serde_json::from_str::<JsonRpcRequest>(line)
        .map(|r| r.method == "shutdown" && r.id.is_some())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn call(server: &McpServer, message: Value) -> JsonRpcResponse {
        server
            .handle_message(&message.to_string())
            .expect("expected a response")
    }

    #[test]
    fn test_parse_request() {
        let json = r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{}}"#;
        let request: JsonRpcRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.method, "initialize");
        assert_eq!(request.jsonrpc, "2.0");
    }

    #[test]
    fn test_serialize_response() {
        let response = JsonRpcResponse::success(json!(1), json!({"status": "ok"}));
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"result\""));
        assert!(!json.contains("\"error\""));
    }

    #[test]
    fn test_initialize() {
        let server = McpServer::default();
        let response = call(
            &server,
            json!({"jsonrpc": "2.0", "id": 1, "method": "initialize", "params": {}}),
        );
        let result = response.result.unwrap();
        assert_eq!(result["serverInfo"]["name"], SERVER_NAME);
        assert_eq!(result["protocolVersion"], PROTOCOL_VERSION);
        assert!(result["capabilities"]["tools"].is_object());
        assert!(result["capabilities"]["prompts"].is_object());
    }

    #[test]
    fn test_notification_has_no_response() {
        let server = McpServer::default();
        let message = json!({"jsonrpc": "2.0", "method": "notifications/initialized"});
        assert!(server.handle_message(&message.to_string()).is_none());
    }

    #[test]
    fn test_parse_error() {
        let server = McpServer::default();
        let response = server.handle_message("{not json").unwrap();
        assert_eq!(response.error.unwrap().code, PARSE_ERROR);
        assert_eq!(response.id, Value::Null);
    }

    #[test]
    fn test_wrong_version() {
        let server = McpServer::default();
        let response = call(&server, json!({"jsonrpc": "1.0", "id": 7, "method": "ping"}));
        assert_eq!(response.error.unwrap().code, INVALID_REQUEST);
        assert_eq!(response.id, json!(7));
    }

    #[test]
    fn test_unknown_method() {
        let server = McpServer::default();
        let response = call(&server, json!({"jsonrpc": "2.0", "id": 2, "method": "resources/list"}));
        let error = response.error.unwrap();
        assert_eq!(error.code, METHOD_NOT_FOUND);
        assert!(error.message.contains("resources/list"));
    }

    #[test]
    fn test_tool_error_is_reported_in_result() {
        let server = McpServer::default();
        let response = call(
            &server,
            json!({
                "jsonrpc": "2.0", "id": 3, "method": "tools/call",
                "params": {"name": "read", "arguments": {"projectRoot": "relative/dir", "type": "tasks"}}
            }),
        );
        let result = response.result.unwrap();
        assert_eq!(result["isError"], true);
        let text = result["content"][0]["text"].as_str().unwrap();
        assert!(text.starts_with("Error: Invalid project root"));
    }

    #[test]
    fn test_tools_call_update_then_read() {
        let temp_dir = TempDir::new().unwrap();
        let server = McpServer::default();
        let root = temp_dir.path().to_string_lossy().to_string();

        let response = call(
            &server,
            json!({
                "jsonrpc": "2.0", "id": 4, "method": "tools/call",
                "params": {"name": "update", "arguments": {"projectRoot": root, "type": "system_architecture", "content": "# Architecture\n"}}
            }),
        );
        assert_eq!(
            response.result.unwrap()["content"][0]["text"],
            "Document updated successfully: true"
        );

        let response = call(
            &server,
            json!({
                "jsonrpc": "2.0", "id": 5, "method": "tools/call",
                "params": {"name": "read", "arguments": {"projectRoot": root, "type": "system_architecture"}}
            }),
        );
        assert_eq!(response.result.unwrap()["content"][0]["text"], "# Architecture\n");
    }

    #[test]
    fn test_tools_call_missing_params() {
        let server = McpServer::default();
        let response = call(&server, json!({"jsonrpc": "2.0", "id": 6, "method": "tools/call"}));
        assert_eq!(response.error.unwrap().code, INVALID_PARAMS);
    }

    #[test]
    fn test_prompts_list() {
        let server = McpServer::default();
        let response = call(&server, json!({"jsonrpc": "2.0", "id": 8, "method": "prompts/list"}));
        let prompts = response.result.unwrap()["prompts"].as_array().unwrap().clone();
        assert_eq!(prompts.len(), PROMPTS.len());
        assert!(prompts.iter().any(|p| p["name"] == "add-task"));

        let prioritize = prompts
            .iter()
            .find(|p| p["name"] == "prioritize-requirements")
            .unwrap();
        assert_eq!(prioritize["_meta"]["path"], "requirements/prioritize-requirements");
        assert_eq!(prioritize["_meta"]["category"]["title"], "Requirements Analysis");
        assert!(prompts.iter().all(|p| p["_meta"]["category"].is_object()));
    }

    #[test]
    fn test_prompts_get_by_path() {
        let server = McpServer::default();
        let response = call(
            &server,
            json!({
                "jsonrpc": "2.0", "id": 9, "method": "prompts/get",
                "params": {"name": "/soloflow-mcp/task/add-task", "arguments": {"taskTitle": "Write docs"}}
            }),
        );
        let result = response.result.unwrap();
        let text = result["messages"][0]["content"]["text"].as_str().unwrap();
        assert!(text.contains("Write docs"));
    }

    #[test]
    fn test_prompts_get_unknown() {
        let server = McpServer::default();
        let response = call(
            &server,
            json!({"jsonrpc": "2.0", "id": 10, "method": "prompts/get", "params": {"name": "nope"}}),
        );
        let error = response.error.unwrap();
        assert_eq!(error.code, INVALID_PARAMS);
        assert!(error.message.contains("nope"));
    }

    #[test]
    fn test_prompts_get_missing_required_argument() {
        let server = McpServer::default();
        let response = call(
            &server,
            json!({"jsonrpc": "2.0", "id": 11, "method": "prompts/get", "params": {"name": "create-doc-template"}}),
        );
        assert_eq!(response.error.unwrap().code, INVALID_PARAMS);
    }

    #[test]
    fn test_completion() {
        let server = McpServer::default();
        let response = call(
            &server,
            json!({
                "jsonrpc": "2.0", "id": 12, "method": "completion/complete",
                "params": {
                    "ref": {"type": "ref/prompt", "name": "create-doc-template"},
                    "argument": {"name": "docType", "value": "req"}
                }
            }),
        );
        let result = response.result.unwrap();
        assert_eq!(result["completion"]["values"], json!(["requirements"]));
    }

    #[tokio::test]
    async fn test_serve_stops_after_shutdown() {
        let server = McpServer::default();
        let input = concat!(
            r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#,
            "\n\n",
            r#"{"jsonrpc":"2.0","id":1,"method":"ping"}"#,
            "\n",
            r#"{"jsonrpc":"2.0","id":2,"method":"shutdown"}"#,
            "\n",
            r#"{"jsonrpc":"2.0","id":3,"method":"ping"}"#,
            "\n",
        );

        let mut output = Vec::new();
        server.serve(input.as_bytes(), &mut output).await.unwrap();

        let lines: Vec<JsonRpcResponse> = String::from_utf8(output)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].id, json!(1));
        assert_eq!(lines[1].id, json!(2));
    }
}
