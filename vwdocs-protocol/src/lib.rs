//! vwdocs-protocol: Shared wire definitions for the vwdocs bridge
//!
//! This crate defines the JSON-RPC 2.0 message types exchanged with the
//! MCP client over stdio, the fixed session-setup result types, and the
//! tool catalog the bridge advertises.

pub mod jsonrpc;
pub mod mcp;
pub mod tools;

// Re-export main types at crate root
pub use jsonrpc::{JsonRpcError, JsonRpcRequest, JsonRpcResponse};
pub use mcp::{InitializeResult, ServerCapabilities, ServerInfo, Tool, ToolsListResult};
pub use tools::{backend_method, tool_catalog, TOOL_METHOD_MAP};

/// MCP protocol version the bridge advertises on `initialize`
pub const PROTOCOL_VERSION: &str = "2024-11-05";
