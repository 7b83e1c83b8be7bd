//! tools/list and tools/call.

use serde_json::json;
use tracing::debug;

use crate::protocol::{error_codes, JsonRpcId, JsonRpcResponse};
use crate::tools::aliases::resolve_alias;
use crate::tools::tool_names;

use super::super::Handlers;

impl Handlers {
    /// Handle tools/list request.
    pub(in crate::handlers) async fn handle_tools_list(
        &self,
        id: Option<JsonRpcId>,
    ) -> JsonRpcResponse {
        debug!("Handling tools/list request");
        JsonRpcResponse::success(id, json!({ "tools": self.registry.list() }))
    }

    /// Handle tools/call request.
    ///
    /// Legacy tool names are resolved before dispatch. Missing `arguments`
    /// (or `null`) is treated as an empty object.
    pub(in crate::handlers) async fn handle_tools_call(
        &self,
        id: Option<JsonRpcId>,
        params: Option<serde_json::Value>,
    ) -> JsonRpcResponse {
        let params = match params {
            Some(p) => p,
            None => {
                return JsonRpcResponse::error(
                    id,
                    error_codes::INVALID_PARAMS,
                    "Missing params for tools/call",
                );
            }
        };

        let requested = match params.get("name").and_then(|v| v.as_str()) {
            Some(n) => n,
            None => {
                return JsonRpcResponse::error(
                    id,
                    error_codes::INVALID_PARAMS,
                    "Missing 'name' parameter in tools/call",
                );
            }
        };

        let tool_name = resolve_alias(requested);
        if tool_name != requested {
            debug!(alias = %requested, tool = %tool_name, "Resolved legacy tool name");
        }

        let arguments = match params.get("arguments") {
            Some(serde_json::Value::Null) | None => json!({}),
            Some(args) => args.clone(),
        };

        debug!(tool = %tool_name, arguments = %arguments, "Calling tool");

        match tool_name {
            tool_names::RANDOM_PHRASE => self.call_random_phrase(id),
            tool_names::RANDOM_FACT => self.call_random_fact(id),
            tool_names::RANDOM_TOPIC => self.call_random_topic(id),
            tool_names::COMPOSE_OPINION => self.call_compose_opinion(id, arguments),
            tool_names::SLANG_LOOKUP => self.call_slang_lookup(id, arguments),
            tool_names::SLANG_LISTING => self.call_slang_listing(id, arguments),
            tool_names::SUBSTITUTE_TEXT => self.call_substitute_text(id, arguments),
            tool_names::STATIC_INFO => self.call_static_info(id),
            tool_names::STATUS_SNAPSHOT => self.call_status_snapshot(id),
            _ => JsonRpcResponse::error(
                id,
                error_codes::TOOL_NOT_FOUND,
                format!("Unknown tool: {}", requested),
            ),
        }
    }
}
