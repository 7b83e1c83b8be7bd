//! Random pick and templated generation tools.

use tracing::debug;

use crate::protocol::{JsonRpcId, JsonRpcResponse};
use crate::tools::tool_names;

use super::super::Handlers;
use super::dtos::ComposeOpinionRequest;

impl Handlers {
    pub(in crate::handlers) fn call_random_phrase(&self, id: Option<JsonRpcId>) -> JsonRpcResponse {
        Self::tool_outcome(id, tool_names::RANDOM_PHRASE, self.service.random_phrase())
    }

    pub(in crate::handlers) fn call_random_fact(&self, id: Option<JsonRpcId>) -> JsonRpcResponse {
        Self::tool_outcome(id, tool_names::RANDOM_FACT, self.service.random_fact())
    }

    pub(in crate::handlers) fn call_random_topic(&self, id: Option<JsonRpcId>) -> JsonRpcResponse {
        Self::tool_outcome(id, tool_names::RANDOM_TOPIC, self.service.random_topic())
    }

    /// compose_opinion: the topic is used verbatim, empty included.
    pub(in crate::handlers) fn call_compose_opinion(
        &self,
        id: Option<JsonRpcId>,
        arguments: serde_json::Value,
    ) -> JsonRpcResponse {
        let request: ComposeOpinionRequest =
            match Self::parse_arguments(&id, tool_names::COMPOSE_OPINION, arguments) {
                Ok(r) => r,
                Err(response) => return response,
            };
        debug!(topic_len = request.topic.len(), "compose_opinion");
        Self::tool_outcome(
            id,
            tool_names::COMPOSE_OPINION,
            self.service.compose_opinion(&request.topic),
        )
    }
}
