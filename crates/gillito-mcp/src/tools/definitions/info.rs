//! Static information tool definitions.

use serde_json::json;

use crate::tools::names;
use crate::tools::types::ToolDefinition;

/// Returns info tool definitions (2 tools).
pub fn definitions() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition::new(
            names::STATIC_INFO,
            "Biography of Gilberto de Jesús Casas 'Gillito' and the purpose of this bot.",
            json!({
                "type": "object",
                "properties": {},
                "required": []
            }),
        ),
        ToolDefinition::new(
            names::STATUS_SNAPSHOT,
            "Describe the platforms and infrastructure of the Mi Pana Gillito bot, \
             stamped with the current UTC time.",
            json!({
                "type": "object",
                "properties": {},
                "required": []
            }),
        ),
    ]
}
