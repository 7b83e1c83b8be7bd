//! Slang dictionary tool definitions.

use serde_json::json;

use crate::tools::names;
use crate::tools::types::ToolDefinition;

/// Returns dictionary tool definitions (3 tools).
pub fn definitions() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition::new(
            names::SLANG_LOOKUP,
            "Look up a Puerto Rican slang term. Exact matches return the full entry; \
             otherwise up to 3 related terms are suggested.",
            json!({
                "type": "object",
                "properties": {
                    "term": {
                        "type": "string",
                        "description": "Term to look up, case-insensitive (legacy name: palabra)"
                    }
                },
                "required": ["term"]
            }),
        ),
        ToolDefinition::new(
            names::SLANG_LISTING,
            "List the slang dictionary sorted by term, optionally filtered by tier.",
            json!({
                "type": "object",
                "properties": {
                    "tier": {
                        "type": "string",
                        "default": "all",
                        "description": "basic, intermediate, advanced or all. Spanish names are \
                                        accepted too (legacy name: nivel)"
                    }
                },
                "required": []
            }),
        ),
        ToolDefinition::new(
            names::SUBSTITUTE_TEXT,
            "Rewrite text with Puerto Rican slang. The output is lowercase and lists \
             every substitution applied.",
            json!({
                "type": "object",
                "properties": {
                    "text": {
                        "type": "string",
                        "description": "Text to rewrite (legacy name: texto)"
                    }
                },
                "required": ["text"]
            }),
        ),
    ]
}
