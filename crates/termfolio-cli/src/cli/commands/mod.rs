//! CLI command handlers.

pub mod config;
pub mod exec;
pub mod interactive;
