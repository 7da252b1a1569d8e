//! Errors raised by the document store

use crate::models::UnknownDocumentType;
use std::path::PathBuf;

/// Reasons a project root is rejected
#[derive(Debug, thiserror::Error)]
pub enum RootError {
    #[error("Project root must be an absolute path: {0}")]
    NotAbsolute(PathBuf),

    #[error("Access to system directories is not allowed: {0}")]
    ForbiddenSystemPath(PathBuf),

    #[error("Project root directory does not exist: {0}")]
    NotFound(PathBuf),

    #[error("Project root must be a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("Project root is outside the configured allowed roots: {0}")]
    OutsideAllowedRoots(PathBuf),

    #[error("Path resolves outside the project root: {0}")]
    EscapesRoot(PathBuf),

    #[error("Error validating project root '{0}': {1}")]
    Inspect(PathBuf, std::io::Error),
}

/// Errors returned by [`crate::services::DocumentStore`] operations
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("Invalid project root: {0}")]
    InvalidRoot(#[from] RootError),

    #[error(transparent)]
    InvalidDocumentType(#[from] UnknownDocumentType),

    #[error("Document content cannot be empty")]
    EmptyContent,

    #[error("Failed to {action} '{}': {source}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl DocumentError {
    pub(crate) fn io(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DocumentError::Io {
            action,
            path: path.into(),
            source,
        }
    }
}
