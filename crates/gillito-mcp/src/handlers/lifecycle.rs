//! MCP lifecycle handlers.

use serde_json::json;
use tracing::info;

use gillito_core::content::templates::SERVER_INSTRUCTIONS;

use crate::protocol::{JsonRpcId, JsonRpcResponse, PROTOCOL_VERSION};

use super::Handlers;

impl Handlers {
    /// Handle MCP initialize request.
    ///
    /// Returns server capabilities following MCP 2024-11-05 protocol specification.
    pub(super) async fn handle_initialize(&self, id: Option<JsonRpcId>) -> JsonRpcResponse {
        info!("Handling initialize request");

        JsonRpcResponse::success(
            id,
            json!({
                "protocolVersion": PROTOCOL_VERSION,
                "capabilities": {
                    "tools": { "listChanged": false }
                },
                "serverInfo": {
                    "name": self.server_info.name,
                    "version": self.server_info.version
                },
                "instructions": SERVER_INSTRUCTIONS
            }),
        )
    }

    /// Handle notifications/initialized. Notifications get no response.
    pub(super) fn handle_initialized_notification(&self) -> JsonRpcResponse {
        info!("Client initialized notification received");
        JsonRpcResponse::no_reply()
    }

    /// Handle MCP shutdown request.
    pub(super) async fn handle_shutdown(&self, id: Option<JsonRpcId>) -> JsonRpcResponse {
        info!("Handling shutdown request");
        JsonRpcResponse::success(id, json!(null))
    }

    pub(super) fn handle_ping(&self, id: Option<JsonRpcId>) -> JsonRpcResponse {
        JsonRpcResponse::success(id, json!({}))
    }
}
