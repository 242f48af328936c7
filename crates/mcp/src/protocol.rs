//! MCP wire types (JSON-RPC 2.0).

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// MCP Protocol version
pub const MCP_VERSION: &str = "2024-11-05";

/// JSON-RPC version tag
pub const JSONRPC_VERSION: &str = "2.0";

/// Invalid JSON was received.
pub const PARSE_ERROR: i32 = -32700;
/// The JSON sent is not a valid request object.
pub const INVALID_REQUEST: i32 = -32600;
/// The method does not exist.
pub const METHOD_NOT_FOUND: i32 = -32601;
/// Invalid method parameters.
pub const INVALID_PARAMS: i32 = -32602;
/// Internal JSON-RPC error.
pub const INTERNAL_ERROR: i32 = -32603;

/// Raw JSON-RPC message as read from the transport.
#[derive(Debug, Clone, Deserialize)]
pub struct JsonRpcMessage {
    /// Request id; `None` only when the key is absent (notifications).
    /// An explicit `null` id is kept as `Some(Value::Null)`.
    #[serde(default, deserialize_with = "present")]
    pub id: Option<Value>,
    /// Method name
    pub method: String,
    /// Method parameters
    #[serde(default)]
    pub params: Value,
}

fn present<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Value>, D::Error> {
    Value::deserialize(deserializer).map(Some)
}

/// MCP Request message.
#[derive(Debug, Clone, PartialEq)]
pub enum McpRequest {
    /// Initialize request
    Initialize {
        /// Version requested by the client
        protocol_version: Option<String>,
    },

    /// Any notification (`notifications/*`)
    Notification(String),

    /// Ping request
    Ping,

    /// List tools request
    ToolsList,

    /// Call tool request
    ToolsCall {
        /// Tool name
        name: String,
        /// Tool arguments
        arguments: Value,
    },
}

#[derive(Deserialize)]
struct InitializeParams {
    #[serde(default, rename = "protocolVersion")]
    protocol_version: Option<String>,
}

#[derive(Deserialize)]
struct CallToolParams {
    name: String,
    #[serde(default)]
    arguments: Value,
}

impl McpRequest {
    /// Decode a method and its parameters.
    pub fn parse(method: &str, params: Value) -> Result<Self, McpError> {
        match method {
            "initialize" => {
                let params: InitializeParams = decode_params(params)?;
                Ok(McpRequest::Initialize {
                    protocol_version: params.protocol_version,
                })
            }
            "ping" => Ok(McpRequest::Ping),
            "tools/list" => Ok(McpRequest::ToolsList),
            "tools/call" => {
                let params: CallToolParams = decode_params(params)?;
                Ok(McpRequest::ToolsCall {
                    name: params.name,
                    arguments: params.arguments,
                })
            }
            m if m.starts_with("notifications/") => Ok(McpRequest::Notification(m.to_string())),
            other => Err(McpError::new(METHOD_NOT_FOUND, format!("Method not found: {}", other))),
        }
    }
}

fn decode_params<T: serde::de::DeserializeOwned>(params: Value) -> Result<T, McpError> {
    let params = if params.is_null() { Value::Object(Default::default()) } else { params };
    serde_json::from_value(params)
        .map_err(|e| McpError::new(INVALID_PARAMS, format!("Invalid params: {}", e)))
}

/// MCP Response message.
#[derive(Debug, Clone, Serialize)]
pub struct McpResponse {
    /// Always `"2.0"`
    pub jsonrpc: &'static str,
    /// Request id, `null` when it could not be read
    pub id: Value,
    /// Result data
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    /// Error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<McpError>,
}

impl McpResponse {
    /// Successful response.
    pub fn success(id: Value, result: Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION,
            id,
            result: Some(result),
            error: None,
        }
    }

    /// Error response.
    pub fn failure(id: Value, error: McpError) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION,
            id,
            result: None,
            error: Some(error),
        }
    }
}

/// MCP Error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct McpError {
    /// JSON-RPC error code
    pub code: i32,
    /// Human-readable message
    pub message: String,
    /// Extra data
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl McpError {
    /// Create an error without data.
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }
}

/// One block of tool output.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Content {
    /// Plain text
    Text {
        /// The text
        text: String,
    },
}

/// Result of `tools/call`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CallToolResult {
    /// Output blocks
    pub content: Vec<Content>,
    /// Whether the call failed
    pub is_error: bool,
}

impl CallToolResult {
    /// Successful text result.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![Content::Text { text: text.into() }],
            is_error: false,
        }
    }

    /// Failed call carrying the error text.
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            content: vec![Content::Text { text: text.into() }],
            is_error: true,
        }
    }
}
