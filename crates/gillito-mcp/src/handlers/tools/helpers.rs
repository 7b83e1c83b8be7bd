//! MCP tool result helpers.

use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::warn;

use gillito_core::CoreResult;

use crate::protocol::{JsonRpcId, JsonRpcResponse};

use super::super::Handlers;

impl Handlers {
    /// Wrap tool output in the MCP result shape:
    /// `{content: [{type: "text", text: "..."}], isError: false}`
    pub(in crate::handlers) fn tool_result(
        id: Option<JsonRpcId>,
        text: impl Into<String>,
    ) -> JsonRpcResponse {
        JsonRpcResponse::success(
            id,
            json!({
                "content": [{
                    "type": "text",
                    "text": text.into()
                }],
                "isError": false
            }),
        )
    }

    /// Tool-level failure. Still a JSON-RPC success, flagged with `isError`.
    pub(in crate::handlers) fn tool_error(id: Option<JsonRpcId>, message: &str) -> JsonRpcResponse {
        JsonRpcResponse::success(
            id,
            json!({
                "content": [{
                    "type": "text",
                    "text": message
                }],
                "isError": true
            }),
        )
    }

    /// Map a core result onto a tool result or tool error.
    pub(in crate::handlers) fn tool_outcome(
        id: Option<JsonRpcId>,
        tool: &str,
        outcome: CoreResult<String>,
    ) -> JsonRpcResponse {
        match outcome {
            Ok(text) => Self::tool_result(id, text),
            Err(e) => {
                warn!(tool = %tool, error = %e, "Tool failed");
                Self::tool_error(id, &e.to_string())
            }
        }
    }

    /// Deserialize tool arguments, or produce the tool error to return.
    pub(in crate::handlers) fn parse_arguments<T: DeserializeOwned>(
        id: &Option<JsonRpcId>,
        tool: &str,
        arguments: serde_json::Value,
    ) -> Result<T, JsonRpcResponse> {
        serde_json::from_value(arguments).map_err(|e| {
            warn!(tool = %tool, error = %e, "Invalid tool arguments");
            Self::tool_error(id.clone(), &format!("Invalid params: {}", e))
        })
    }
}
