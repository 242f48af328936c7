//! MCP server for the BasisData API.
//!
//! Serves the BasisData tools to MCP clients over newline-delimited
//! JSON-RPC on stdin/stdout.

#![warn(missing_docs)]

pub mod protocol;
pub mod server;

pub use protocol::{McpError, McpRequest, McpResponse, MCP_VERSION};
pub use server::{McpServer, McpServerConfig};
