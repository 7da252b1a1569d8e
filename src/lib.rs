// SoloFlow MCP - project document store served over the Model Context Protocol
// Keeps per-project planning documents under `<root>/.soloflow/`

pub mod cli;
pub mod config;
pub mod context;
pub mod error;
pub mod logging;
pub mod mcp;
pub mod models;
pub mod prompts;
pub mod services;

pub use anyhow::{Context, Result};
pub use colored::Colorize;

// Re-export commonly used types
pub use config::ServerConfig;
pub use error::{DocumentError, RootError};
pub use mcp::McpServer;
pub use models::{DocumentSummary, DocumentType, InitReport, ReadResult, UpdateResult};
pub use services::DocumentStore;
