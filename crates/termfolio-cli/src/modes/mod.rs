//! Runtime execution modes.
//!
//! - `exec`: one-shot plain-text output on stdout
//! - `tui`: full-screen interactive terminal (optional feature)

pub mod exec;

#[cfg(feature = "tui")]
pub use termfolio_tui::run_interactive;

#[cfg(not(feature = "tui"))]
pub fn run_interactive(
    _config: &termfolio_core::config::Config,
    _dispatcher: termfolio_core::Dispatcher,
) -> anyhow::Result<()> {
    anyhow::bail!("TUI support is disabled in this build (feature \"tui\").");
}
