//! MCP Tool Registry and Implementations
//!
//! One tool per document-store operation. Each tool module exposes a
//! `definition()` with its JSON input schema and an `execute()` that parses the
//! arguments and delegates to [`DocumentStore`].

pub mod init;
pub mod list;
pub mod read;
pub mod update;

use crate::services::DocumentStore;
use crate::Result;
use serde_json::{json, Value};

/// Registry of available MCP tools
pub struct ToolRegistry {
    tools: Vec<ToolDefinition>,
}

/// Tool definition for MCP protocol
#[derive(Clone)]
pub struct ToolDefinition {
    pub name: String,
    pub title: String,
    pub description: String,
    pub input_schema: Value,
}

impl ToolRegistry {
    /// Create a new tool registry with all available tools
    pub fn new() -> Self {
        Self {
            tools: vec![
                list::definition(),
                read::definition(),
                update::definition(),
                init::definition(),
            ],
        }
    }

    /// List all available tools in MCP format
    pub fn list_tools(&self) -> Vec<Value> {
        self.tools
            .iter()
            .map(|t| {
                json!({
                    "name": t.name,
                    "title": t.title,
                    "description": t.description,
                    "inputSchema": t.input_schema
                })
            })
            .collect()
    }

    /// Call a tool by name with the given arguments
    pub fn call_tool(&self, name: &str, arguments: &Value, store: &DocumentStore) -> Result<String> {
        match name {
            "list" => list::execute(arguments, store),
            "read" => read::execute(arguments, store),
            "update" => update::execute(arguments, store),
            "init" => init::execute(arguments, store),
            _ => anyhow::bail!("Unknown tool: {}", name),
        }
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper to extract a required string field from JSON
pub fn get_required_string(args: &Value, field: &str) -> Result<String> {
    args.get(field)
        .and_then(|v| v.as_str())
        .map(|s| s.to_string())
        .ok_or_else(|| anyhow::anyhow!("Missing required field: {}", field))
}

/// JSON schema for the `projectRoot` argument shared by every tool
fn project_root_schema() -> Value {
    json!({
        "type": "string",
        "description": "Absolute path to project root"
    })
}

/// JSON schema for the `type` argument
fn doc_type_schema() -> Value {
    json!({
        "type": "string",
        "enum": crate::models::DocumentType::NAMES,
        "description": "Document type (overview, requirements, etc.)"
    })
}
