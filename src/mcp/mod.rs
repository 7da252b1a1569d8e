//! MCP (Model Context Protocol) server for the SoloFlow document store
//!
//! ## Tools
//! - `list` - List the documents in `.soloflow/`
//! - `read` - Read one document by type
//! - `update` - Create or replace one document
//! - `init` - Create `.soloflow/` and the editor rule file
//!
//! Prompts from [`crate::prompts`] are served through `prompts/list` and
//! `prompts/get`.

pub mod http_server;
pub mod server;
pub mod tools;

pub use http_server::{router, start_server};
pub use server::{JsonRpcError, JsonRpcRequest, JsonRpcResponse, McpServer};
