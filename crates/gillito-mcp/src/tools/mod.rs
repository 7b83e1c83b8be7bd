//! MCP tool definitions following the MCP 2024-11-05 protocol specification.
//!
//! # Module Structure
//!
//! - `types`: `ToolDefinition`
//! - `names`: tool name constants for dispatch matching
//! - `aliases`: legacy Spanish tool names
//! - `registry`: name -> definition lookup
//! - `definitions`: definitions grouped by category
//!   - `dictionary`: slang_lookup, slang_listing, substitute_text
//!   - `content`: random_phrase, random_fact, random_topic, compose_opinion
//!   - `info`: static_info, status_snapshot

pub mod aliases;
pub mod definitions;
pub mod names;
pub mod registry;
pub mod types;

pub use self::definitions::get_tool_definitions;
pub use self::names as tool_names;
