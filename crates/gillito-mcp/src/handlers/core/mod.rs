//! Core Handlers struct and dispatch logic.

mod dispatch;
mod handlers;

pub use self::handlers::Handlers;
