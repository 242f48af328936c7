//! MCP server over stdio.

use basisdata_tools::{ToolError, ToolRegistry};
use serde_json::{json, Value};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, BufWriter};
use tracing::{debug, error, info, warn};

use crate::protocol::{
    CallToolResult, JsonRpcMessage, McpError, McpRequest, McpResponse, INTERNAL_ERROR,
    INVALID_PARAMS, INVALID_REQUEST, MCP_VERSION, PARSE_ERROR,
};

/// MCP server configuration.
#[derive(Debug, Clone)]
pub struct McpServerConfig {
    /// Server name for MCP identification
    pub server_name: String,
    /// Server version
    pub version: String,
}

impl Default for McpServerConfig {
    fn default() -> Self {
        Self {
            server_name: "basisdata".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// BasisData MCP server.
pub struct McpServer {
    config: McpServerConfig,
    registry: ToolRegistry,
}

impl McpServer {
    /// Create a server exposing the tools in `registry`.
    pub fn new(config: McpServerConfig, registry: ToolRegistry) -> Self {
        Self { config, registry }
    }

    /// Get the server configuration.
    pub fn config(&self) -> &McpServerConfig {
        &self.config
    }

    /// The tools this server exposes.
    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Handle one decoded request. Returns the JSON-RPC result or error.
    pub async fn handle_request(&self, request: McpRequest) -> Result<Value, McpError> {
        match request {
            McpRequest::Initialize { protocol_version } => {
                let protocol_version = protocol_version.unwrap_or_else(|| MCP_VERSION.to_string());
                debug!("MCP Initialize request - version: {}", protocol_version);
                Ok(json!({
                    "protocolVersion": protocol_version,
                    "capabilities": {
                        "tools": {}
                    },
                    "serverInfo": {
                        "name": self.config.server_name,
                        "version": self.config.version
                    }
                }))
            }

            McpRequest::Notification(method) => {
                debug!("Notification: {}", method);
                Ok(Value::Null)
            }

            McpRequest::Ping => Ok(json!({})),

            McpRequest::ToolsList => Ok(json!({ "tools": self.registry.schemas() })),

            McpRequest::ToolsCall { name, arguments } => {
                debug!("Tool call: {} with args: {}", name, arguments);
                let result = match self.registry.call(&name, arguments).await {
                    Ok(text) => CallToolResult::text(text),
                    Err(ToolError::UnknownTool(name)) => {
                        return Err(McpError::new(INVALID_PARAMS, format!("Unknown tool: {}", name)));
                    }
                    Err(e) => {
                        warn!("Tool {} failed: {}", name, e);
                        CallToolResult::error(format!("Error executing tool {}: {}", name, e))
                    }
                };
                serde_json::to_value(result)
                    .map_err(|e| McpError::new(INTERNAL_ERROR, format!("Unserializable result: {}", e)))
            }
        }
    }

    /// Handle one line of input. Returns the serialized reply, if any.
    ///
    /// Notifications never get a reply.
    pub async fn handle_line(&self, line: &str) -> Option<String> {
        let response = match serde_json::from_str::<Value>(line) {
            Err(e) => {
                error!("Failed to parse request: {}", e);
                Some(McpResponse::failure(
                    Value::Null,
                    McpError::new(PARSE_ERROR, format!("Parse error: {}", e)),
                ))
            }
            Ok(raw) => self.handle_message(raw).await,
        }?;

        match serde_json::to_string(&response) {
            Ok(text) => Some(text),
            Err(e) => {
                error!("Failed to serialize response: {}", e);
                None
            }
        }
    }

    async fn handle_message(&self, raw: Value) -> Option<McpResponse> {
        let fallback_id = raw.get("id").cloned().unwrap_or(Value::Null);
        let message: JsonRpcMessage = match serde_json::from_value(raw) {
            Ok(message) => message,
            Err(e) => {
                return Some(McpResponse::failure(
                    fallback_id,
                    McpError::new(INVALID_REQUEST, format!("Invalid request: {}", e)),
                ));
            }
        };

        let outcome = match McpRequest::parse(&message.method, message.params) {
            Ok(request) => self.handle_request(request).await,
            Err(e) => Err(e),
        };

        let id = message.id?;
        Some(match outcome {
            Ok(result) => McpResponse::success(id, result),
            Err(e) => McpResponse::failure(id, e),
        })
    }

    /// Serve requests from `reader`, writing replies to `writer`, until EOF.
    pub async fn serve<R, W>(&self, mut reader: R, writer: W) -> anyhow::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut writer = BufWriter::new(writer);
        let mut buf = Vec::new();

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf).await? == 0 {
                break;
            }

            let reply = match std::str::from_utf8(&buf) {
                Ok(line) if line.trim().is_empty() => continue,
                Ok(line) => self.handle_line(line).await,
                Err(e) => {
                    error!("Request is not valid UTF-8: {}", e);
                    parse_error_reply(format!("Parse error: {}", e))
                }
            };
            let Some(reply) = reply else {
                continue;
            };

            writer.write_all(reply.as_bytes()).await?;
            writer.write_all(b"\n").await?;
            writer.flush().await?;
        }

        Ok(())
    }

    /// Start the MCP server with stdio transport.
    pub async fn start(&self) -> anyhow::Result<()> {
        info!(
            "Starting BasisData MCP Server v{} (stdio transport, {} tools)",
            self.config.version,
            self.registry.len()
        );

        let result = self
            .serve(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
            .await;

        info!("MCP Server stopped");
        result
    }
}

fn parse_error_reply(message: String) -> Option<String> {
    let response = McpResponse::failure(Value::Null, McpError::new(PARSE_ERROR, message));
    serde_json::to_string(&response).ok()
}
