//! Mi Pana Gillito MCP Server
//!
//! JSON-RPC 2.0 server implementing the Model Context Protocol (MCP) for the
//! Puerto Rican slang and trivia tools.
//!
//! # Transport
//!
//! - stdio: Standard input/output (default)
//! - tcp: newline-delimited JSON over TCP
//!
//! # Usage
//!
//! ```bash
//! # Run with layered configuration (config/default.toml, GILLITO__* env vars)
//! gillito-mcp
//!
//! # Run with a specific config file
//! gillito-mcp --config /path/to/config.toml
//!
//! # Run with TCP transport on the original port
//! gillito-mcp --transport tcp --port 8000
//!
//! # Run in debug mode
//! RUST_LOG=debug gillito-mcp
//! ```
//!
//! # CLI Argument Priority
//!
//! CLI arguments > Environment variables > Config file > Defaults
//! - `--transport` overrides `GILLITO_TRANSPORT`, `config.mcp.transport`
//! - `--port` overrides `GILLITO_TCP_PORT`, `config.mcp.tcp_port`
//! - `--bind` overrides `GILLITO_BIND_ADDRESS`, `config.mcp.bind_address`

use std::env;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use gillito_core::config::Config;
use gillito_mcp::{McpServer, TransportMode};

// ============================================================================
// CLI Argument Parsing
// ============================================================================

/// Parsed CLI arguments for the MCP server.
#[derive(Debug, Default, PartialEq)]
struct CliArgs {
    /// Path to configuration file
    config_path: Option<PathBuf>,
    /// Transport mode override (--transport)
    transport: Option<String>,
    /// TCP port override (--port)
    port: Option<u16>,
    /// TCP bind address override (--bind)
    bind_address: Option<String>,
    /// Show help
    help: bool,
}

impl CliArgs {
    /// Parse process arguments.
    fn parse() -> Result<Self> {
        Self::parse_from(env::args().skip(1))
    }

    /// Supports: --config, --transport, --port, --bind, --help, -h.
    /// Unknown arguments are ignored; a flag missing its value is an error.
    fn parse_from<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut cli = CliArgs::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--help" | "-h" => cli.help = true,
                "--config" => cli.config_path = Some(PathBuf::from(value_for(&arg, args.next())?)),
                "--transport" => cli.transport = Some(value_for(&arg, args.next())?),
                "--port" => {
                    let raw = value_for(&arg, args.next())?;
                    let port = raw
                        .parse::<u16>()
                        .map_err(|e| anyhow::anyhow!("Invalid --port '{}': {}", raw, e))?;
                    cli.port = Some(port);
                }
                "--bind" => cli.bind_address = Some(value_for(&arg, args.next())?),
                _ => {}
            }
        }

        Ok(cli)
    }
}

fn value_for(flag: &str, value: Option<String>) -> Result<String> {
    value.ok_or_else(|| anyhow::anyhow!("{} requires a value", flag))
}

/// Print help message.
fn print_help() {
    eprintln!(
        r#"Mi Pana Gillito MCP Server

USAGE:
    gillito-mcp [OPTIONS]

OPTIONS:
    --config <PATH>      Path to configuration file
    --transport <MODE>   Transport mode: stdio (default) or tcp
    --port <PORT>        TCP port (only used with --transport tcp)
    --bind <ADDRESS>     TCP bind address (only used with --transport tcp)
    --help, -h           Show this help message

ENVIRONMENT VARIABLES:
    GILLITO_TRANSPORT     Transport mode (stdio|tcp)
    GILLITO_TCP_PORT      TCP port number
    GILLITO_BIND_ADDRESS  TCP bind address
    GILLITO_ENV           Selects config/<GILLITO_ENV>.toml (default: development)
    GILLITO__<SECTION>__<KEY>  Any config value, e.g. GILLITO__CONTENT__DEFAULT_TIER
    RUST_LOG              Log filter (error, warn, info, debug, trace)

PRIORITY:
    CLI arguments > Environment variables > Config file > Defaults
"#
    );
}

/// Apply CLI/env overrides to config.
///
/// Called after the config is loaded and before it is validated again.
fn apply_overrides<F>(config: &mut Config, cli: &CliArgs, env_var: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(port) = cli.port {
        info!("CLI override: tcp_port = {}", port);
        config.mcp.tcp_port = port;
    } else if let Some(port_str) = env_var("GILLITO_TCP_PORT") {
        match port_str.parse::<u16>() {
            Ok(port) => {
                info!("ENV override: tcp_port = {}", port);
                config.mcp.tcp_port = port;
            }
            Err(_) => tracing::warn!("Ignoring invalid GILLITO_TCP_PORT='{}'", port_str),
        }
    }

    if let Some(ref bind) = cli.bind_address {
        info!("CLI override: bind_address = {}", bind);
        config.mcp.bind_address = bind.clone();
    } else if let Some(bind) = env_var("GILLITO_BIND_ADDRESS") {
        info!("ENV override: bind_address = {}", bind);
        config.mcp.bind_address = bind;
    }

    if let Some(ref transport) = cli.transport {
        info!("CLI override: transport = {}", transport);
        config.mcp.transport = transport.clone();
    } else if let Some(transport) = env_var("GILLITO_TRANSPORT") {
        info!("ENV override: transport = {}", transport);
        config.mcp.transport = transport;
    }
}

fn determine_transport_mode(config: &Config) -> Result<TransportMode> {
    Ok(config.mcp.transport_mode()?)
}

/// Logging goes to stderr only: stdout carries JSON-RPC.
///
/// `RUST_LOG` wins, then `logging.level`, then `error`.
fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.logging.level))
        .unwrap_or_else(|_| EnvFilter::new("error"));

    fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .with_file(config.logging.include_location)
        .with_line_number(config.logging.include_location)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = CliArgs::parse()?;

    if cli.help {
        print_help();
        return Ok(());
    }

    let mut config = match cli.config_path {
        Some(ref path) => Config::from_file(path)?,
        None => Config::load()?,
    };

    init_logging(&config);
    info!("Mi Pana Gillito MCP Server starting...");

    apply_overrides(&mut config, &cli, |key| env::var(key).ok());
    config.validate()?;

    let transport_mode = determine_transport_mode(&config)?;
    let server = Arc::new(McpServer::new(config)?);

    match transport_mode {
        TransportMode::Stdio => {
            info!("Listening on stdio");
            server.run().await?;
        }
        TransportMode::Tcp => {
            info!("Starting TCP transport");
            server.run_tcp().await?;
        }
    }

    info!("MCP Server shutdown complete");
    Ok(())
}
