//! Request handlers for MCP methods.
//!
//! # Module Organization
//!
//! - `core`: `Handlers` struct and method dispatch
//! - `lifecycle`: initialize, initialized notification, shutdown, ping
//! - `tools`: tools/list and tools/call, one file per tool category

mod core;
mod lifecycle;
mod tools;

#[cfg(test)]
mod tests;

pub use self::core::Handlers;
