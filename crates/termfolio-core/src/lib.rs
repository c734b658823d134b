//! Core termfolio library (command table, dispatcher, content, config).

pub mod commands;
pub mod config;
pub mod content;
pub mod dispatch;
pub mod logging;
pub mod output;
pub mod theme;

pub use dispatch::{Dispatcher, ParsedCommand, Reply};
pub use output::{Inline, Link, LinkKind, Output};
pub use theme::Theme;
