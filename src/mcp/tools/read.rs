//! read MCP Tool
//!
//! Reads one document by type.

use super::{doc_type_schema, get_required_string, project_root_schema, ToolDefinition};
use crate::services::DocumentStore;
use crate::Result;
use serde_json::{json, Value};

/// Text returned when the requested document has never been written
pub const NOT_FOUND_TEXT: &str = "Document not found";

/// Get the tool definition for read
pub fn definition() -> ToolDefinition {
    ToolDefinition {
        name: "read".to_string(),
        title: "Read Document".to_string(),
        description: "Read document content by type".to_string(),
        input_schema: json!({
            "type": "object",
            "required": ["projectRoot", "type"],
            "properties": {
                "projectRoot": project_root_schema(),
                "type": doc_type_schema()
            }
        }),
    }
}

/// Execute the read tool
pub fn execute(args: &Value, store: &DocumentStore) -> Result<String> {
    let project_root = get_required_string(args, "projectRoot")?;
    let doc_type = get_required_string(args, "type")?;

    let result = store.read(&project_root, &doc_type)?;
    Ok(result.raw.unwrap_or_else(|| NOT_FOUND_TEXT.to_string()))
}
