//! Tool abstraction.

use async_trait::async_trait;
use basisdata_client::ClientError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A tool that can be called by an MCP client.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Get tool name.
    fn name(&self) -> &str;

    /// Get tool description.
    fn description(&self) -> &str;

    /// JSON Schema of the tool arguments.
    fn input_schema(&self) -> Value;

    /// Run the tool. Domain failures come back as `Ok` text.
    async fn call(&self, arguments: Value) -> Result<String, ToolError>;

    /// Get tool schema (for AI discovery).
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: self.name().to_string(),
            description: self.description().to_string(),
            input_schema: self.input_schema(),
        }
    }
}

/// Errors that fail a tool call outright.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    /// No tool registered under this name
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// Arguments did not match the tool's schema
    #[error("Invalid arguments for {tool}: {source}")]
    InvalidArguments {
        /// Tool name
        tool: String,
        /// Decode failure
        #[source]
        source: serde_json::Error,
    },

    /// Transport or HTTP failure
    #[error(transparent)]
    Upstream(#[from] ClientError),
}

/// Tool schema for AI discovery, shaped like an MCP tool listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolSchema {
    /// Tool name
    pub name: String,

    /// Description
    pub description: String,

    /// Arguments schema
    pub input_schema: Value,
}
