//! Request dispatch logic for MCP handlers.

use tracing::debug;

use crate::protocol::{error_codes, methods, JsonRpcRequest, JsonRpcResponse};

use super::handlers::Handlers;

impl Handlers {
    /// Dispatch a request to the appropriate handler.
    ///
    /// Tools are only reachable through tools/call; calling a tool name as a
    /// method is METHOD_NOT_FOUND.
    ///
    /// A message without `id` is a notification and never gets a reply. Only
    /// `notifications/*` methods are acted on; any other id-less request is
    /// dropped before it runs.
    pub async fn dispatch(&self, request: JsonRpcRequest) -> JsonRpcResponse {
        debug!(method = %request.method, "Dispatching");

        if request.id.is_none() && !request.method.starts_with(methods::NOTIFICATION_PREFIX) {
            debug!(method = %request.method, "Dropping id-less request");
            return JsonRpcResponse::no_reply();
        }

        match request.method.as_str() {
            // MCP lifecycle methods
            methods::INITIALIZE => self.handle_initialize(request.id).await,
            methods::INITIALIZED => self.handle_initialized_notification(),
            methods::SHUTDOWN => self.handle_shutdown(request.id).await,
            methods::PING => self.handle_ping(request.id),

            // MCP tools protocol
            methods::TOOLS_LIST => self.handle_tools_list(request.id).await,
            methods::TOOLS_CALL => self.handle_tools_call(request.id, request.params).await,

            // Unknown notifications are ignored
            _ if request.id.is_none() => {
                debug!(method = %request.method, "Ignoring unknown notification");
                JsonRpcResponse::no_reply()
            }

            _ => JsonRpcResponse::error(
                request.id,
                error_codes::METHOD_NOT_FOUND,
                format!("Method not found: {}. Use tools/call for tool access.", request.method),
            ),
        }
    }
}
