//! Argument DTOs for tools that take input.
//!
//! Field aliases accept the argument names of the legacy Spanish tools.

use serde::Deserialize;

/// Arguments for `slang_lookup`.
#[derive(Debug, Clone, Deserialize)]
pub struct SlangLookupRequest {
    #[serde(alias = "palabra")]
    pub term: String,
}

/// Arguments for `slang_listing`. A missing tier uses the configured default.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SlangListingRequest {
    #[serde(default, alias = "nivel")]
    pub tier: Option<String>,
}

/// Arguments for `compose_opinion`.
#[derive(Debug, Clone, Deserialize)]
pub struct ComposeOpinionRequest {
    #[serde(alias = "tema")]
    pub topic: String,
}

/// Arguments for `substitute_text`.
#[derive(Debug, Clone, Deserialize)]
pub struct SubstituteTextRequest {
    #[serde(alias = "texto")]
    pub text: String,
}
