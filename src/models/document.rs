//! Document model for the `.soloflow/` store
//!
//! Every project keeps one markdown file per [`DocumentType`]. The set of
//! types is closed: a file is only recognized when its name is exactly
//! `<type>.md`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of project document, one file per kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    Overview,
    Requirements,
    SystemArchitecture,
    TestStrategy,
    UiDesign,
    Tasks,
    Deployment,
    Notes,
}

impl DocumentType {
    /// All document types, in listing order
    pub const ALL: [DocumentType; 8] = [
        DocumentType::Overview,
        DocumentType::Requirements,
        DocumentType::SystemArchitecture,
        DocumentType::TestStrategy,
        DocumentType::UiDesign,
        DocumentType::Tasks,
        DocumentType::Deployment,
        DocumentType::Notes,
    ];

    /// Wire names, indexed like [`DocumentType::ALL`]
    pub const NAMES: [&'static str; 8] = [
        "overview",
        "requirements",
        "system_architecture",
        "test_strategy",
        "ui_design",
        "tasks",
        "deployment",
        "notes",
    ];

    pub fn as_str(&self) -> &'static str {
        Self::NAMES[*self as usize]
    }

    /// File name inside the store directory, e.g. `tasks.md`
    pub fn file_name(&self) -> String {
        format!("{}.md", self.as_str())
    }

    /// Short human description, shown in tool schemas and CLI help
    pub fn description(&self) -> &'static str {
        match self {
            DocumentType::Overview => "Project overview and summary",
            DocumentType::Requirements => "Functional and non-functional requirements",
            DocumentType::SystemArchitecture => "Technical architecture design",
            DocumentType::TestStrategy => "Testing strategy and plans",
            DocumentType::UiDesign => "UI/UX design specifications",
            DocumentType::Tasks => "Project task lists and progress",
            DocumentType::Deployment => "Deployment and infrastructure docs",
            DocumentType::Notes => "Project notes and observations",
        }
    }

    /// Comma separated list of every valid type name
    pub fn valid_names() -> String {
        Self::NAMES.join(", ")
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name one of the eight document types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid document type: {}. Valid types are: {}", .candidate, DocumentType::valid_names())]
pub struct UnknownDocumentType {
    pub candidate: String,
}

impl FromStr for DocumentType {
    type Err = UnknownDocumentType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DocumentType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownDocumentType {
                candidate: s.to_string(),
            })
    }
}

/// Listing entry for one document on disk
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentSummary {
    #[serde(rename = "type")]
    pub doc_type: DocumentType,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub last_updated: DateTime<Utc>,
}

/// Result of `read`: `raw` is `None` when the document was never written
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReadResult {
    pub raw: Option<String>,
}

/// Result of `update`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UpdateResult {
    pub ok: bool,
}

/// Result of `init`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InitReport {
    pub ok: bool,
    pub created_files: Vec<String>,
    pub skipped_files: Vec<String>,
    pub message: String,
}

impl InitReport {
    /// Build the report and its summary message from created/skipped files
    pub fn new(created_files: Vec<String>, skipped_files: Vec<String>) -> Self {
        let mut message = String::new();

        if !created_files.is_empty() {
            message.push_str(&format!("✅ Created files: {}\n", created_files.join(", ")));
        }
        if !skipped_files.is_empty() {
            message.push_str(&format!(
                "⚠️  Skipped existing files: {}\n",
                skipped_files.join(", ")
            ));
            message.push_str("   These files already exist and were not overwritten.\n");
        }

        match (created_files.is_empty(), skipped_files.is_empty()) {
            (true, true) => message = "ℹ️  No files were created or modified.".to_string(),
            (false, true) => message.push_str("🎉 Project initialization completed successfully!"),
            (true, false) => {
                message.push_str("ℹ️  Project is already initialized. All required files exist.")
            }
            (false, false) => message.push_str(
                "🔄 Project initialization completed with some existing files preserved.",
            ),
        }

        Self {
            ok: true,
            created_files,
            skipped_files,
            message,
        }
    }
}

/// Title of a document: the text after a leading `# ` on its first line
pub fn extract_title(content: &str) -> Option<String> {
    let first_line = content.split('\n').next()?;
    let title = first_line.strip_prefix("# ")?.trim();
    if title.is_empty() {
        None
    } else {
        Some(title.to_string())
    }
}
