//! Exec command handler.

use std::io::{self, BufRead};

use anyhow::{Context, Result};
use termfolio_core::config::Config;
use termfolio_core::content::Content;
use termfolio_core::{Dispatcher, logging};

use crate::modes;

/// Default log filter for one-shot runs; stderr should stay quiet.
const EXEC_LOG_FILTER: &str = "warn";

fn dispatcher(config: &Config) -> Result<Dispatcher> {
    let content = Content::load(config.data_dir.as_deref()).context("load portfolio content")?;
    Ok(Dispatcher::new(content))
}

/// Runs a single command line.
pub fn run(config: &Config, line: &str) -> Result<()> {
    logging::init_stderr_logging(&config.effective_log_filter(EXEC_LOG_FILTER));
    let dispatcher = dispatcher(config)?;
    modes::exec::run_exec(&dispatcher, line, &mut io::stdout().lock())
}

/// Runs every line of `input` as its own command.
pub fn run_lines(config: &Config, input: impl BufRead) -> Result<()> {
    logging::init_stderr_logging(&config.effective_log_filter(EXEC_LOG_FILTER));
    let dispatcher = dispatcher(config)?;
    let mut out = io::stdout().lock();
    for line in input.lines() {
        let line = line.context("read command from stdin")?;
        modes::exec::run_exec(&dispatcher, &line, &mut out)?;
    }
    Ok(())
}
