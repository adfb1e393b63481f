mod convert;

use serde::{Deserialize, Serialize};

// Re-export types needed by tool handlers
pub use super::{JsonRpcError, Tool};

// MCP Protocol types for tools
#[derive(Debug, Serialize)]
pub struct ServerInfo {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Serialize)]
pub struct ServerCapabilities {
    pub tools: Option<ToolsCapability>,
}

#[derive(Debug, Serialize)]
pub struct ToolsCapability {}

#[derive(Debug, Serialize)]
pub struct InitializeResult {
    #[serde(rename = "protocolVersion")]
    pub protocol_version: String,
    pub capabilities: ServerCapabilities,
    #[serde(rename = "serverInfo")]
    pub server_info: ServerInfo,
}

#[derive(Debug, Serialize)]
pub struct ToolsList {
    pub tools: Vec<Tool>,
}

#[derive(Debug, Deserialize)]
pub struct CallToolParams {
    pub name: String,
    pub arguments: Option<serde_json::Value>,
}

#[derive(Debug, Serialize)]
pub struct CallToolResult {
    pub content: Vec<Content>,
    #[serde(rename = "isError", skip_serializing_if = "Option::is_none")]
    pub is_error: Option<bool>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub enum Content {
    #[serde(rename = "text")]
    Text { text: String },
}

fn internal_error(e: serde_json::Error) -> JsonRpcError {
    JsonRpcError::new(JsonRpcError::INTERNAL_ERROR, format!("Internal error: {e}"))
}

pub fn handle_initialize() -> Result<serde_json::Value, JsonRpcError> {
    let result = InitializeResult {
        protocol_version: "2024-11-05".to_string(),
        capabilities: ServerCapabilities {
            tools: Some(ToolsCapability {}),
        },
        server_info: ServerInfo {
            name: "radix".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
    };

    serde_json::to_value(result).map_err(internal_error)
}

pub fn handle_tools_list() -> Result<serde_json::Value, JsonRpcError> {
    let tools = vec![
        Tool {
            name: "convert_number".to_string(),
            description: "Convert a number from one base to another (bases 2 to 36) and explain the conversion step by step. Non-decimal input is expanded by positional values into a decimal intermediate, which is then turned into the target base by successive division. Returns the result, the ordered steps, and a validity flag with an error message for invalid input.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "input": {
                        "type": "string",
                        "description": "Digits to convert using 0-9 and A-Z (case-insensitive, surrounding whitespace ignored). No sign, prefix or radix point."
                    },
                    "from_base": {
                        "type": "integer",
                        "description": "Base of the input, 2 to 36"
                    },
                    "to_base": {
                        "type": "integer",
                        "description": "Base to convert to, 2 to 36"
                    }
                },
                "required": ["input", "from_base", "to_base"]
            }),
        },
        Tool {
            name: "convert_to_all_systems".to_string(),
            description: "Convert a number to binary, octal, decimal and hexadecimal at once. Returns the four values and a validity flag with an error message for invalid input.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "input": {
                        "type": "string",
                        "description": "Digits to convert using 0-9 and A-Z (case-insensitive)"
                    },
                    "from_base": {
                        "type": "integer",
                        "description": "Base of the input, 2 to 36 (default: 10)"
                    }
                },
                "required": ["input"]
            }),
        },
    ];

    let result = ToolsList { tools };

    serde_json::to_value(result).map_err(internal_error)
}

pub fn handle_tools_call(
    params: Option<serde_json::Value>,
    global: &crate::Global,
) -> Result<serde_json::Value, JsonRpcError> {
    let params: CallToolParams = serde_json::from_value(params.unwrap_or(serde_json::Value::Null))
        .map_err(|e| {
            JsonRpcError::new(JsonRpcError::INVALID_PARAMS, format!("Invalid params: {e}"))
        })?;

    match params.name.as_str() {
        "convert_number" => convert::handle_convert_number(params.arguments, global),
        "convert_to_all_systems" => {
            convert::handle_convert_to_all_systems(params.arguments, global)
        }
        _ => Err(JsonRpcError::new(
            JsonRpcError::INVALID_PARAMS,
            format!("Unknown tool: {}", params.name),
        )),
    }
}

/// Wrap a serializable payload as pretty JSON text content
fn text_result<T: Serialize>(payload: &T, is_error: bool) -> Result<serde_json::Value, JsonRpcError> {
    let json_string = serde_json::to_string_pretty(payload).map_err(|e| {
        JsonRpcError::new(
            JsonRpcError::INTERNAL_ERROR,
            format!("Serialization error: {e}"),
        )
    })?;

    let result = CallToolResult {
        content: vec![Content::Text { text: json_string }],
        is_error: is_error.then_some(true),
    };

    serde_json::to_value(result).map_err(internal_error)
}
