//! Biography and status tools.

use crate::protocol::{JsonRpcId, JsonRpcResponse};

use super::super::Handlers;

impl Handlers {
    pub(in crate::handlers) fn call_static_info(&self, id: Option<JsonRpcId>) -> JsonRpcResponse {
        Self::tool_result(id, self.service.static_info())
    }

    /// Timestamped at call time, UTC.
    pub(in crate::handlers) fn call_status_snapshot(&self, id: Option<JsonRpcId>) -> JsonRpcResponse {
        Self::tool_result(id, self.service.status_snapshot())
    }
}
