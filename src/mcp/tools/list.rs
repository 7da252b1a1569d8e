//! list MCP Tool
//!
//! Lists the documents present in `<projectRoot>/.soloflow/`.

use super::{get_required_string, project_root_schema, ToolDefinition};
use crate::services::DocumentStore;
use crate::Result;
use serde_json::{json, Value};

/// Get the tool definition for list
pub fn definition() -> ToolDefinition {
    ToolDefinition {
        name: "list".to_string(),
        title: "List Documents".to_string(),
        description: "List all documents in the .soloflow directory".to_string(),
        input_schema: json!({
            "type": "object",
            "required": ["projectRoot"],
            "properties": {
                "projectRoot": project_root_schema()
            }
        }),
    }
}

/// Execute the list tool; returns the summaries as pretty JSON
pub fn execute(args: &Value, store: &DocumentStore) -> Result<String> {
    let project_root = get_required_string(args, "projectRoot")?;
    let documents = store.list(&project_root)?;
    Ok(serde_json::to_string_pretty(&documents)?)
}
