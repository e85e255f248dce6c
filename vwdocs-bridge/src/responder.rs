//! Local protocol responder
//!
//! Answers session-setup requests (`initialize`, `tools/list`) entirely
//! in-process. Everything else is either handed off to the connection
//! manager (`tools/call`) or declared not ours to answer.

use vwdocs_protocol::{tool_catalog, InitializeResult, JsonRpcRequest, JsonRpcResponse, ToolsListResult};

use crate::error::McpError;

/// Outcome of offering a request to the local responder.
///
/// The hand-off contract is explicit: a request is either answered here,
/// must be forwarded to the backend, or belongs to neither side.
#[derive(Debug)]
pub enum LocalOutcome {
    /// Answered locally; emit this response and stop
    Answered(JsonRpcResponse),
    /// A tool invocation; the connection manager takes over
    ForwardRequired,
    /// Not a method this bridge knows anything about
    NotApplicable,
}

/// Offer a request to the local responder.
///
/// `initialize` accepts any params shape and always succeeds; the fixed
/// identity is the whole point.
pub fn respond(request: &JsonRpcRequest) -> Result<LocalOutcome, McpError> {
    match request.method.as_str() {
        "initialize" => {
            let result = serde_json::to_value(InitializeResult::default())
                .map_err(|e| McpError::Internal(e.to_string()))?;
            Ok(LocalOutcome::Answered(JsonRpcResponse::success(
                request.id.clone(),
                result,
            )))
        }
        "tools/list" => {
            let result = serde_json::to_value(ToolsListResult {
                tools: tool_catalog(),
            })
            .map_err(|e| McpError::Internal(e.to_string()))?;
            Ok(LocalOutcome::Answered(JsonRpcResponse::success(
                request.id.clone(),
                result,
            )))
        }
        "tools/call" => Ok(LocalOutcome::ForwardRequired),
        _ => Ok(LocalOutcome::NotApplicable),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_initialize_returns_fixed_identity() {
        let request = JsonRpcRequest::new(json!("init-1"), "initialize", json!({"weird": ["shape"]}));

        let outcome = respond(&request).unwrap();
        let LocalOutcome::Answered(response) = outcome else {
            panic!("initialize must be answered locally");
        };

        assert_eq!(response.id, json!("init-1"));
        let result = response.result.unwrap();
        assert_eq!(result["protocolVersion"], "2024-11-05");
        assert_eq!(result["serverInfo"]["name"], "vectorworks-docs");
    }

    #[test]
    fn test_initialize_accepts_null_params() {
        let request = JsonRpcRequest::new(json!(1), "initialize", serde_json::Value::Null);

        let outcome = respond(&request).unwrap();
        assert!(matches!(outcome, LocalOutcome::Answered(_)));
    }

    #[test]
    fn test_tools_list_returns_three_descriptors_in_order() {
        let request = JsonRpcRequest::new(json!(2), "tools/list", serde_json::Value::Null);

        let outcome = respond(&request).unwrap();
        let LocalOutcome::Answered(response) = outcome else {
            panic!("tools/list must be answered locally");
        };

        let result = response.result.unwrap();
        let tools = result["tools"].as_array().unwrap();
        let names: Vec<&str> = tools.iter().map(|t| t["name"].as_str().unwrap()).collect();
        assert_eq!(names, vec!["vw_search", "vw_answer", "vw_get"]);
    }

    #[test]
    fn test_tools_call_defers_to_connection_manager() {
        let request = JsonRpcRequest::new(
            json!(3),
            "tools/call",
            json!({"name": "vw_search", "arguments": {"query": "worksheets"}}),
        );

        let outcome = respond(&request).unwrap();
        assert!(matches!(outcome, LocalOutcome::ForwardRequired));
    }

    #[test]
    fn test_unrecognized_methods_fall_through() {
        for method in ["ping", "notifications/initialized", "resources/list"] {
            let request = JsonRpcRequest::new(json!(4), method, serde_json::Value::Null);
            let outcome = respond(&request).unwrap();
            assert!(
                matches!(outcome, LocalOutcome::NotApplicable),
                "{} should not be handled",
                method
            );
        }
    }
}
