//! Handler tests driving `Handlers::dispatch` end to end.
//!
//! Random operations run against a scripted `RandomSource`, so every
//! response here is deterministic apart from the status timestamp.


use std::sync::Arc;

use gillito_core::config::{ContentConfig, ServerConfig};
use gillito_core::random::{FixedRandom, RandomSource};
use gillito_core::{ContentService, ContentTables};

use crate::protocol::{JsonRpcId, JsonRpcRequest, JsonRpcResponse};

use super::Handlers;

/// Handlers over the builtin tables with an injected random source.
pub(crate) fn create_test_handlers_with(random: Arc<dyn RandomSource>) -> Handlers {
    let service = ContentService::new(ContentTables::builtin(), random, ContentConfig::default());
    Handlers::new(service, ServerConfig::default()).expect("handlers")
}

pub(crate) fn create_test_handlers() -> Handlers {
    create_test_handlers_with(Arc::new(FixedRandom(0)))
}

/// Helper function to create a JSON-RPC request
pub(crate) fn make_request(
    method: &str,
    id: i64,
    params: Option<serde_json::Value>,
) -> JsonRpcRequest {
    JsonRpcRequest {
        jsonrpc: "2.0".to_string(),
        id: Some(JsonRpcId::Number(id)),
        method: method.to_string(),
        params,
    }
}

pub(crate) fn make_tool_call(tool: &str, id: i64, arguments: serde_json::Value) -> JsonRpcRequest {
    make_request(
        "tools/call",
        id,
        Some(serde_json::json!({ "name": tool, "arguments": arguments })),
    )
}

/// Extract `(text, isError)` from a tool call response.
pub(crate) fn tool_text(response: &JsonRpcResponse) -> (String, bool) {
    assert!(response.error.is_none(), "unexpected protocol error: {:?}", response.error);
    let result = response.result.as_ref().expect("result");
    let text = result["content"][0]["text"]
        .as_str()
        .expect("text content")
        .to_string();
    let is_error = result["isError"].as_bool().expect("isError flag");
    (text, is_error)
}
