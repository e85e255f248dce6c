//! Tool catalog and backend method translation
//!
//! Defines the three documentation tools the bridge advertises to MCP
//! clients, and the fixed mapping from tool name to the backend's JSON-RPC
//! method name.

use crate::mcp::Tool;

/// Fixed mapping from client-facing tool name to backend method name.
///
/// A tool name absent from this table is an error, never a silent drop.
pub const TOOL_METHOD_MAP: &[(&str, &str)] = &[
    ("vw_search", "vw.search"),
    ("vw_answer", "vw.answer"),
    ("vw_get", "vw.get"),
];

/// Look up the backend method for a client-facing tool name
pub fn backend_method(tool: &str) -> Option<&'static str> {
    TOOL_METHOD_MAP
        .iter()
        .find(|(name, _)| *name == tool)
        .map(|(_, method)| *method)
}

/// Get all tool definitions the bridge advertises on `tools/list`
pub fn tool_catalog() -> Vec<Tool> {
    vec![
        Tool {
            name: "vw_search".into(),
            description: "Search Vectorworks Python/VectorScript documentation. Returns relevant documentation chunks.".into(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "Search query"
                    },
                    "k": {
                        "type": "number",
                        "description": "Number of results to return (default: 6)",
                        "default": 6
                    }
                },
                "required": ["query"]
            }),
        },
        Tool {
            name: "vw_answer".into(),
            description: "Get an answer to a question about Vectorworks scripting based on documentation. Returns a draft answer with source citations.".into(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "Question about Vectorworks scripting"
                    },
                    "k": {
                        "type": "number",
                        "description": "Number of documentation chunks to use (default: 6)",
                        "default": 6
                    }
                },
                "required": ["query"]
            }),
        },
        Tool {
            name: "vw_get".into(),
            description: "Get a specific documentation chunk by ID.".into(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "doc_id": {
                        "type": "string",
                        "description": "Document ID"
                    },
                    "chunk_id": {
                        "type": "number",
                        "description": "Chunk ID within the document"
                    }
                },
                "required": ["doc_id", "chunk_id"]
            }),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_three_tools_in_order() {
        let tools = tool_catalog();
        let names: Vec<&str> = tools.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["vw_search", "vw_answer", "vw_get"]);
    }

    #[test]
    fn test_every_advertised_tool_has_a_backend_method() {
        for tool in tool_catalog() {
            assert!(
                backend_method(&tool.name).is_some(),
                "no backend method for {}",
                tool.name
            );
        }
    }

    #[test]
    fn test_backend_method_translation() {
        assert_eq!(backend_method("vw_search"), Some("vw.search"));
        assert_eq!(backend_method("vw_answer"), Some("vw.answer"));
        assert_eq!(backend_method("vw_get"), Some("vw.get"));
    }

    #[test]
    fn test_backend_method_unknown_tool() {
        assert_eq!(backend_method("vw_delete"), None);
        assert_eq!(backend_method(""), None);
    }

    #[test]
    fn test_schemas_declare_required_params() {
        let tools = tool_catalog();
        assert_eq!(tools[0].input_schema["required"], serde_json::json!(["query"]));
        assert_eq!(tools[1].input_schema["required"], serde_json::json!(["query"]));
        assert_eq!(
            tools[2].input_schema["required"],
            serde_json::json!(["doc_id", "chunk_id"])
        );
    }
}
