//! Handlers struct definition and constructors.

use gillito_core::config::ServerConfig;
use gillito_core::ContentService;
use tracing::info;

use crate::tools::registry::ToolRegistry;

/// Request handlers for MCP protocol.
///
/// Stateless apart from immutable content, so one instance serves every
/// connection concurrently.
pub struct Handlers {
    /// Query layer over the static content tables.
    pub(in crate::handlers) service: ContentService,

    /// Every tool advertised by tools/list.
    pub(in crate::handlers) registry: ToolRegistry,

    /// Name and version reported in `serverInfo`.
    pub(in crate::handlers) server_info: ServerConfig,
}

impl Handlers {
    /// Create handlers over `service`.
    ///
    /// Fails only if the builtin tool definitions contain a duplicate name.
    pub fn new(service: ContentService, server_info: ServerConfig) -> anyhow::Result<Self> {
        let registry = ToolRegistry::with_all_tools().map_err(anyhow::Error::msg)?;
        info!(
            tools = registry.len(),
            slang_entries = service.lexicon().len(),
            "Handlers created"
        );
        Ok(Self {
            service,
            registry,
            server_info,
        })
    }
}
