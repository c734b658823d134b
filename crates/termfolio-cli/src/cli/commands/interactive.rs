//! Interactive terminal handler (the default command).

use std::io::{self, IsTerminal};

use anyhow::{Context, Result};
use termfolio_core::config::{Config, paths};
use termfolio_core::content::Content;
use termfolio_core::{Dispatcher, logging};

use super::exec;
use crate::modes;

const INTERACTIVE_LOG_FILTER: &str = "info";

pub fn run(config: &Config) -> Result<()> {
    // If stdin is piped, run each line through exec mode instead
    if !io::stdin().is_terminal() {
        return exec::run_lines(config, io::stdin().lock());
    }

    let _log_guard = logging::init_file_logging(
        &config.effective_log_filter(INTERACTIVE_LOG_FILTER),
        &paths::logs_dir(),
    )?;

    let content = Content::load(config.data_dir.as_deref()).context("load portfolio content")?;
    modes::run_interactive(config, Dispatcher::new(content)).context("interactive session failed")
}
