//! Slang dictionary tools.
//!
//! Not-found, empty and no-change outcomes are ordinary results with an
//! explanatory message, never tool errors.

use crate::protocol::{JsonRpcId, JsonRpcResponse};
use crate::tools::tool_names;

use super::super::Handlers;
use super::dtos::{SlangListingRequest, SlangLookupRequest, SubstituteTextRequest};

impl Handlers {
    pub(in crate::handlers) fn call_slang_lookup(
        &self,
        id: Option<JsonRpcId>,
        arguments: serde_json::Value,
    ) -> JsonRpcResponse {
        let request: SlangLookupRequest =
            match Self::parse_arguments(&id, tool_names::SLANG_LOOKUP, arguments) {
                Ok(r) => r,
                Err(response) => return response,
            };
        Self::tool_result(id, self.service.slang_lookup(&request.term))
    }

    pub(in crate::handlers) fn call_slang_listing(
        &self,
        id: Option<JsonRpcId>,
        arguments: serde_json::Value,
    ) -> JsonRpcResponse {
        let request: SlangListingRequest =
            match Self::parse_arguments(&id, tool_names::SLANG_LISTING, arguments) {
                Ok(r) => r,
                Err(response) => return response,
            };
        Self::tool_result(id, self.service.slang_listing(request.tier.as_deref()))
    }

    pub(in crate::handlers) fn call_substitute_text(
        &self,
        id: Option<JsonRpcId>,
        arguments: serde_json::Value,
    ) -> JsonRpcResponse {
        let request: SubstituteTextRequest =
            match Self::parse_arguments(&id, tool_names::SUBSTITUTE_TEXT, arguments) {
                Ok(r) => r,
                Err(response) => return response,
            };
        Self::tool_result(id, self.service.substitute_text(&request.text))
    }
}
