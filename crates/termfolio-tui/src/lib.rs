//! Full-screen terminal portfolio.

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod mutations;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, Write, stderr, stdout};

use anyhow::Result;
pub use features::{input, statusline, transcript};
pub use runtime::TuiRuntime;
use termfolio_core::Dispatcher;
use termfolio_core::config::Config;

use crate::state::TuiState;

/// Runs the interactive terminal until the user quits.
///
/// # Errors
/// Returns an error if stdout is not a terminal or terminal I/O fails.
pub fn run_interactive(config: &Config, dispatcher: Dispatcher) -> Result<()> {
    // The TUI draws to stdout, so it must be a terminal
    if !stdout().is_terminal() {
        anyhow::bail!(
            "Interactive mode requires a terminal.\n\
             Use `termfolio exec <command>` for non-interactive use."
        );
    }

    let state = TuiState::new(dispatcher, config.theme, config.prompt.clone());
    let mut runtime = TuiRuntime::new(state)?;
    let result = runtime.run();

    // Restore terminal before printing anything
    drop(runtime);

    if result.is_ok() {
        let mut err = stderr();
        writeln!(err, "Goodbye!")?;
    }

    result
}
