//! Tool definitions (9 tools total).

pub(crate) mod content;
pub(crate) mod dictionary;
pub(crate) mod info;

use crate::tools::types::ToolDefinition;

/// Get all tool definitions for the `tools/list` response.
pub fn get_tool_definitions() -> Vec<ToolDefinition> {
    let mut tools = Vec::with_capacity(9);

    // Content tools (4)
    tools.extend(content::definitions());

    // Dictionary tools (3)
    tools.extend(dictionary::definitions());

    // Info tools (2)
    tools.extend(info::definitions());

    tools
}
