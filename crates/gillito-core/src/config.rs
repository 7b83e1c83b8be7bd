//! Configuration management for the Gillito content server.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CoreError, CoreResult};

mod sub_configs;

pub use sub_configs::{ContentConfig, LoggingConfig, McpConfig, ServerConfig, TransportMode};

/// Main configuration structure.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub mcp: McpConfig,
    pub logging: LoggingConfig,
    pub content: ContentConfig,
}

impl Config {
    /// Load configuration from files and environment.
    ///
    /// Configuration is loaded in order:
    /// 1. config/default.toml (base settings)
    /// 2. config/{GILLITO_ENV}.toml (environment-specific)
    /// 3. Environment variables with the GILLITO__ prefix, e.g. `GILLITO__MCP__TCP_PORT`
    pub fn load() -> CoreResult<Self> {
        let env = std::env::var("GILLITO_ENV").unwrap_or_else(|_| "development".to_string());

        let builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", env)).required(false))
            .add_source(
                config::Environment::with_prefix("GILLITO")
                    .separator("__")
                    .try_parsing(true),
            );

        let config: Config = builder.build()?.try_deserialize()?;
        config.validate()?;
        debug!(env = %env, transport = %config.mcp.transport, "Configuration loaded");
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn from_file(path: &std::path::Path) -> CoreResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CoreError::ConfigError(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        debug!(path = %path.display(), "Configuration loaded from file");
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> CoreResult<()> {
        if self.server.name.trim().is_empty() {
            return Err(CoreError::ConfigError(
                "server.name must be non-empty".into(),
            ));
        }

        self.mcp.validate()?;
        self.content.validate()?;

        Ok(())
    }
}
