//! MCP session-setup types
//!
//! Result payloads for the `initialize` and `tools/list` requests the
//! bridge answers locally.

use serde::{Deserialize, Serialize};

/// MCP Tool definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tool {
    /// Tool name (e.g., "vw_search")
    pub name: String,
    /// Human-readable description
    pub description: String,
    /// JSON Schema for input parameters
    #[serde(rename = "inputSchema")]
    pub input_schema: serde_json::Value,
}

/// MCP Server capabilities
#[derive(Debug, Serialize, Deserialize)]
pub struct ServerCapabilities {
    /// Tool capabilities
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<ToolsCapability>,
}

impl Default for ServerCapabilities {
    fn default() -> Self {
        Self {
            tools: Some(ToolsCapability {}),
        }
    }
}

/// Tool capability marker (empty for now, but can be extended)
#[derive(Debug, Serialize, Deserialize)]
pub struct ToolsCapability {}

/// MCP Server information
#[derive(Debug, Serialize, Deserialize)]
pub struct ServerInfo {
    /// Server name
    pub name: String,
    /// Server version
    pub version: String,
}

impl Default for ServerInfo {
    fn default() -> Self {
        Self {
            name: "vectorworks-docs".into(),
            version: env!("CARGO_PKG_VERSION").into(),
        }
    }
}

/// Initialize response
#[derive(Debug, Serialize, Deserialize)]
pub struct InitializeResult {
    /// Protocol version
    #[serde(rename = "protocolVersion")]
    pub protocol_version: String,
    /// Server capabilities
    pub capabilities: ServerCapabilities,
    /// Server info
    #[serde(rename = "serverInfo")]
    pub server_info: ServerInfo,
}

impl Default for InitializeResult {
    fn default() -> Self {
        Self {
            protocol_version: crate::PROTOCOL_VERSION.into(),
            capabilities: ServerCapabilities::default(),
            server_info: ServerInfo::default(),
        }
    }
}

/// Tools list response
#[derive(Debug, Serialize, Deserialize)]
pub struct ToolsListResult {
    /// Available tools
    pub tools: Vec<Tool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initialize_result_serialization() {
        let result = InitializeResult::default();
        let json = serde_json::to_string(&result).unwrap();

        assert!(json.contains("protocolVersion"));
        assert!(json.contains("2024-11-05"));
        assert!(json.contains("vectorworks-docs"));
    }

    #[test]
    fn test_initialize_result_advertises_tools_capability() {
        let result = InitializeResult::default();
        let value = serde_json::to_value(result).unwrap();

        assert_eq!(value["capabilities"]["tools"], serde_json::json!({}));
        assert_eq!(value["serverInfo"]["version"], env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_tool_definition_serialization() {
        let tool = Tool {
            name: "test_tool".into(),
            description: "A test tool".into(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {}
            }),
        };

        let json = serde_json::to_string(&tool).unwrap();
        assert!(json.contains("test_tool"));
        assert!(json.contains("inputSchema"));
    }
}
