// src/cli/mod.rs
//! CLI command handlers.

pub mod args;
pub mod dispatch;
pub mod format;
pub mod handlers;
pub mod menu;

pub use args::Cli;
pub use handlers::Session;
