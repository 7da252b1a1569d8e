//! update MCP Tool
//!
//! Creates or replaces one document by type.

use super::{doc_type_schema, get_required_string, project_root_schema, ToolDefinition};
use crate::services::DocumentStore;
use crate::Result;
use serde_json::{json, Value};

/// Get the tool definition for update
pub fn definition() -> ToolDefinition {
    ToolDefinition {
        name: "update".to_string(),
        title: "Update Document".to_string(),
        description: "Create or update document content. The whole document is replaced."
            .to_string(),
        input_schema: json!({
            "type": "object",
            "required": ["projectRoot", "type", "content"],
            "properties": {
                "projectRoot": project_root_schema(),
                "type": doc_type_schema(),
                "content": {
                    "type": "string",
                    "description": "Document content in Markdown format"
                }
            }
        }),
    }
}

/// Execute the update tool
pub fn execute(args: &Value, store: &DocumentStore) -> Result<String> {
    let project_root = get_required_string(args, "projectRoot")?;
    let doc_type = get_required_string(args, "type")?;
    let content = get_required_string(args, "content")?;

    let result = store.update(&project_root, &doc_type, &content)?;
    Ok(format!("Document updated successfully: {}", result.ok))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_update_creates_document() {
        let temp_dir = TempDir::new().unwrap();
        let args = json!({
            "projectRoot": temp_dir.path(),
            "type": "tasks",
            "content": "# Tasks\n- [ ] A"
        });

        let result = execute(&args, &DocumentStore::new()).unwrap();
        assert_eq!(result, "Document updated successfully: true");

        let written = std::fs::read_to_string(temp_dir.path().join(".soloflow/tasks.md")).unwrap();
        assert_eq!(written, "# Tasks\n- [ ] A");
    }

    #[test]
    fn test_update_empty_content() {
        let temp_dir = TempDir::new().unwrap();
        let args = json!({ "projectRoot": temp_dir.path(), "type": "tasks", "content": "  " });

        let err = execute(&args, &DocumentStore::new()).unwrap_err();
        assert!(err.to_string().contains("cannot be empty"));
    }

    #[test]
    fn test_update_missing_content() {
        let temp_dir = TempDir::new().unwrap();
        let args = json!({ "projectRoot": temp_dir.path(), "type": "tasks" });

        let err = execute(&args, &DocumentStore::new()).unwrap_err();
        assert!(err.to_string().contains("Missing required field: content"));
    }
}
