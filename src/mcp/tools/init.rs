//! init MCP Tool
//!
//! Sets up `.soloflow/` and the editor rule file for a project.

use super::{get_required_string, project_root_schema, ToolDefinition};
use crate::services::DocumentStore;
use crate::Result;
use serde_json::{json, Value};

/// Get the tool definition for init
pub fn definition() -> ToolDefinition {
    ToolDefinition {
        name: "init".to_string(),
        title: "Initialize Project".to_string(),
        description: "Initialize project configuration (.soloflow/ and .cursor/rules/soloflow.mdc). Existing files are never overwritten.".to_string(),
        input_schema: json!({
            "type": "object",
            "required": ["projectRoot"],
            "properties": {
                "projectRoot": project_root_schema()
            }
        }),
    }
}

/// Execute the init tool; returns the human-readable summary
pub fn execute(args: &Value, store: &DocumentStore) -> Result<String> {
    let project_root = get_required_string(args, "projectRoot")?;
    let report = store.init(&project_root)?;
    Ok(report.message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_twice() {
        let temp_dir = TempDir::new().unwrap();
        let args = json!({ "projectRoot": temp_dir.path() });
        let store = DocumentStore::new();

        let first = execute(&args, &store).unwrap();
        assert!(first.contains("Created files: .cursor/rules/soloflow.mdc"));

        let second = execute(&args, &store).unwrap();
        assert!(second.contains("Skipped existing files: .cursor/rules/soloflow.mdc"));
    }

    #[test]
    fn test_init_relative_root() {
        let args = json!({ "projectRoot": "some/project" });
        let err = execute(&args, &DocumentStore::new()).unwrap_err();
        assert!(err.to_string().contains("absolute"));
    }
}
