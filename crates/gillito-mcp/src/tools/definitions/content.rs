//! Random pick and templated generation tool definitions.

use serde_json::json;

use crate::tools::names;
use crate::tools::types::ToolDefinition;

/// Returns content tool definitions (4 tools).
pub fn definitions() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition::new(
            names::RANDOM_PHRASE,
            "Get a random classic Gillito phrase.",
            json!({
                "type": "object",
                "properties": {},
                "required": []
            }),
        ),
        ToolDefinition::new(
            names::RANDOM_FACT,
            "Get a random fun fact about Puerto Rico.",
            json!({
                "type": "object",
                "properties": {},
                "required": []
            }),
        ),
        ToolDefinition::new(
            names::RANDOM_TOPIC,
            "Suggest a random comedy topic paired with a Gillito-style setup line.",
            json!({
                "type": "object",
                "properties": {},
                "required": []
            }),
        ),
        ToolDefinition::new(
            names::COMPOSE_OPINION,
            "Frame a topic with a random Gillito intro and closing line. \
             The topic is inserted verbatim.",
            json!({
                "type": "object",
                "properties": {
                    "topic": {
                        "type": "string",
                        "description": "Topic to give an opinion about (legacy name: tema)"
                    }
                },
                "required": ["topic"]
            }),
        ),
    ]
}
