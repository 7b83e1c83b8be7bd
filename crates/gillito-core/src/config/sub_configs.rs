//! Sub-configuration structures.
//!
//! This module contains the individual configuration structs that make up
//! the main `Config` structure.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::types::TierFilter;

/// Server identity reported in the MCP `initialize` response.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    pub name: String,
    pub version: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: "mi-pana-gillito".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Wire transport for the MCP server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportMode {
    Stdio,
    Tcp,
}

impl TransportMode {
    /// Parse a transport name, case-insensitively.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "stdio" => Some(TransportMode::Stdio),
            "tcp" => Some(TransportMode::Tcp),
            _ => None,
        }
    }
}

/// MCP transport settings. The TCP limits only apply with `transport = "tcp"`.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct McpConfig {
    pub transport: String,
    /// Longest accepted request line, in bytes.
    pub max_payload_size: usize,
    /// Seconds a single request may take before TCP_CLIENT_TIMEOUT.
    pub request_timeout: u64,
    pub bind_address: String,
    pub tcp_port: u16,
    pub max_connections: usize,
}

impl Default for McpConfig {
    fn default() -> Self {
        Self {
            transport: "stdio".to_string(),
            max_payload_size: 10 * 1024 * 1024,
            request_timeout: 30,
            bind_address: "127.0.0.1".to_string(),
            tcp_port: 8000,
            max_connections: 32,
        }
    }
}

fn invalid(field: &str, message: impl Into<String>) -> CoreError {
    CoreError::ValidationError {
        field: format!("mcp.{}", field),
        message: message.into(),
    }
}

impl McpConfig {
    /// The configured transport, or a validation error naming the bad value.
    pub fn transport_mode(&self) -> CoreResult<TransportMode> {
        TransportMode::parse(&self.transport).ok_or_else(|| {
            invalid(
                "transport",
                format!("must be 'stdio' or 'tcp', got '{}'", self.transport),
            )
        })
    }

    pub fn validate(&self) -> CoreResult<()> {
        let mode = self.transport_mode()?;

        if self.max_payload_size == 0 {
            return Err(invalid("max_payload_size", "must be > 0"));
        }
        if self.request_timeout == 0 {
            return Err(invalid("request_timeout", "must be > 0"));
        }

        match mode {
            TransportMode::Stdio => Ok(()),
            TransportMode::Tcp if self.bind_address.trim().is_empty() => {
                Err(invalid("bind_address", "must be non-empty for tcp"))
            }
            TransportMode::Tcp if self.tcp_port == 0 => {
                Err(invalid("tcp_port", "must be in range 1-65535"))
            }
            TransportMode::Tcp if self.max_connections == 0 => {
                Err(invalid("max_connections", "must be > 0 for tcp"))
            }
            TransportMode::Tcp => Ok(()),
        }
    }
}

/// Logging configuration.
///
/// `RUST_LOG` takes precedence over `level` when set.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub include_location: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            include_location: false,
        }
    }
}

/// Content query defaults.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ContentConfig {
    /// Tier used by slang_listing when the caller omits one.
    pub default_tier: String,
    /// Cap on partial-match candidates returned by slang_lookup.
    pub max_partial_matches: usize,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            default_tier: "all".to_string(),
            max_partial_matches: crate::lookup::MAX_PARTIAL_MATCHES,
        }
    }
}

impl ContentConfig {
    /// Validate content defaults.
    ///
    /// Unlike a caller-supplied tier, the configured default must be a known
    /// tier or the wildcard.
    pub fn validate(&self) -> CoreResult<()> {
        if TierFilter::parse(&self.default_tier).is_none() {
            return Err(CoreError::ValidationError {
                field: "content.default_tier".to_string(),
                message: format!(
                    "'{}' is not one of {}",
                    self.default_tier,
                    TierFilter::ACCEPTED.join(", ")
                ),
            });
        }

        if self.max_partial_matches == 0 {
            return Err(CoreError::ValidationError {
                field: "content.max_partial_matches".to_string(),
                message: "must be >= 1".to_string(),
            });
        }

        Ok(())
    }
}
