//! MCP tool call handlers.
//!
//! - random_phrase, random_fact, random_topic, compose_opinion (content_tools.rs)
//! - slang_lookup, slang_listing, substitute_text (dictionary_tools.rs)
//! - static_info, status_snapshot (info_tools.rs)

mod content_tools;
mod dictionary_tools;
mod dispatch;
mod helpers;
mod info_tools;

pub mod dtos;
