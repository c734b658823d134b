//! Tracing setup.
//!
//! The interactive terminal owns stdout/stderr, so it logs to a rolling file.
//! One-shot modes log to stderr.

use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const LOG_FILE_PREFIX: &str = "termfolio.log";

fn env_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Logs to a daily-rolling file in `log_dir`.
///
/// Keep the returned guard alive for the whole session; dropping it flushes
/// and stops the background writer.
///
/// # Errors
/// Returns an error if the log directory cannot be created.
pub fn init_file_logging(directive: &str, log_dir: &Path) -> Result<WorkerGuard> {
    std::fs::create_dir_all(log_dir)
        .with_context(|| format!("Failed to create log dir {}", log_dir.display()))?;

    let file_appender = tracing_appender::rolling::daily(log_dir, LOG_FILE_PREFIX);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(false)
        .with_writer(non_blocking_file);

    // A subscriber may already be installed (tests, embedding); keep it.
    let _ = tracing_subscriber::registry()
        .with(env_filter(directive))
        .with(file_layer)
        .try_init();

    Ok(guard)
}

/// Logs compact lines to stderr.
pub fn init_stderr_logging(directive: &str) {
    let stderr_layer = fmt::layer()
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr);

    let _ = tracing_subscriber::registry()
        .with(env_filter(directive))
        .with(stderr_layer)
        .try_init();
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_file_logging_creates_dir() {
        let dir = tempdir().unwrap();
        let log_dir = dir.path().join("logs");

        let guard = init_file_logging("debug", &log_dir).unwrap();
        tracing::info!("hello from test");
        drop(guard);

        assert!(log_dir.is_dir());
    }

    #[test]
    fn test_bad_directive_falls_back() {
        // Must not panic on garbage input.
        let _ = env_filter("not a [valid filter");
    }
}
