//! Non-interactive mode: dispatch a command line and print plain text.

use std::io::Write;

use anyhow::{Context, Result};
use termfolio_core::Dispatcher;

/// Runs one command line and writes its plain-text output.
///
/// Blank input and `clear` print nothing. Theme changes only affect the
/// interactive terminal, so here they are reported but not applied.
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn run_exec(dispatcher: &Dispatcher, line: &str, out: &mut impl Write) -> Result<()> {
    if line.trim().is_empty() {
        return Ok(());
    }

    let reply = dispatcher.dispatch(line);
    if let Some(theme) = reply.set_theme {
        tracing::debug!(%theme, "theme change ignored outside the interactive terminal");
    }
    if reply.output.is_empty() {
        return Ok(());
    }

    writeln!(out, "{}", reply.output.to_plain_text()).context("write output")
}
