//! Service layer for soloflow-mcp
//!
//! Business logic shared by the MCP tools and the CLI commands so both
//! surfaces behave identically.

pub mod document_service;

pub use document_service::DocumentStore;
