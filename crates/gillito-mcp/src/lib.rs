//! Mi Pana Gillito MCP server library.
//!
//! JSON-RPC 2.0 / MCP 2024-11-05 front end for the `gillito-core` content
//! tools. The `gillito-mcp` binary wires this up to stdio or TCP.

pub mod handlers;
pub mod protocol;
pub mod server;
pub mod tools;

pub use handlers::Handlers;
pub use server::{McpServer, TransportMode};
