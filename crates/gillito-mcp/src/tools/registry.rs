//! Tool registry: O(1) lookup by name, deterministic listing.

use std::collections::HashMap;

use super::definitions::get_tool_definitions;
use super::types::ToolDefinition;

/// Registry holding all MCP tool definitions.
pub struct ToolRegistry {
    tools: HashMap<String, ToolDefinition>,
}

impl ToolRegistry {
    /// Create empty registry.
    pub fn new() -> Self {
        Self {
            tools: HashMap::with_capacity(16),
        }
    }

    /// Registry populated with every tool the server exposes.
    pub fn with_all_tools() -> Result<Self, String> {
        let mut registry = Self::new();
        for tool in get_tool_definitions() {
            registry.register(tool)?;
        }
        Ok(registry)
    }

    /// Register a tool definition. Fails if the name is already taken.
    pub fn register(&mut self, tool: ToolDefinition) -> Result<(), String> {
        if self.tools.contains_key(&tool.name) {
            return Err(format!(
                "Duplicate tool registration: '{}'. Each tool name must be unique.",
                tool.name
            ));
        }
        self.tools.insert(tool.name.clone(), tool);
        Ok(())
    }

    /// Get a tool definition by name.
    pub fn get(&self, name: &str) -> Option<&ToolDefinition> {
        self.tools.get(name)
    }

    /// List all registered tools (sorted by name for deterministic output).
    pub fn list(&self) -> Vec<&ToolDefinition> {
        let mut tools: Vec<_> = self.tools.values().collect();
        tools.sort_by(|a, b| a.name.cmp(&b.name));
        tools
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}
