//! Bridge error types

use std::io;

use vwdocs_protocol::JsonRpcError;

/// Errors raised while routing MCP requests
#[derive(Debug, thiserror::Error)]
pub enum McpError {
    /// IO error (stdin/stdout)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid parameters
    #[error("Invalid parameters: {0}")]
    InvalidParams(String),

    /// Unknown tool
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<McpError> for JsonRpcError {
    fn from(err: McpError) -> Self {
        match err {
            McpError::InvalidParams(msg) => JsonRpcError::new(JsonRpcError::INVALID_PARAMS, msg),
            McpError::UnknownTool(name) => JsonRpcError::new(
                JsonRpcError::METHOD_NOT_FOUND,
                format!("Unknown tool: {}", name),
            ),
            McpError::Io(err) => {
                JsonRpcError::new(JsonRpcError::INTERNAL_ERROR, format!("IO error: {}", err))
            }
            McpError::Json(err) => {
                JsonRpcError::new(JsonRpcError::PARSE_ERROR, format!("JSON error: {}", err))
            }
            McpError::Internal(msg) => JsonRpcError::new(JsonRpcError::INTERNAL_ERROR, msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_tool_maps_to_method_not_found() {
        let rpc: JsonRpcError = McpError::UnknownTool("vw_delete".into()).into();
        assert_eq!(rpc.code, JsonRpcError::METHOD_NOT_FOUND);
        assert!(rpc.message.contains("vw_delete"));
    }

    #[test]
    fn test_invalid_params_maps_to_invalid_params_code() {
        let rpc: JsonRpcError = McpError::InvalidParams("Missing 'name' parameter".into()).into();
        assert_eq!(rpc.code, JsonRpcError::INVALID_PARAMS);
    }

    #[test]
    fn test_internal_maps_to_internal_code() {
        let rpc: JsonRpcError = McpError::Internal("boom".into()).into();
        assert_eq!(rpc.code, JsonRpcError::INTERNAL_ERROR);
        assert_eq!(rpc.message, "boom");
    }
}
