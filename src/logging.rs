//! Launcher log file
//!
//! Everything goes to `logs/launcher.log` (rotated daily). The terminal is
//! left to the progress bar and the final error report.

use std::fs;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::error::Result;

/// Environment variable overriding the log filter
pub const LOG_ENV: &str = "FRESHSTART_LOG";

const LOG_FILE: &str = "launcher.log";

fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "freshstart=debug"
    } else {
        "freshstart=info"
    }
}

/// Build the filter: `FRESHSTART_LOG` wins, then the verbosity default
pub fn filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)))
}

/// Install the global subscriber writing into `log_dir`.
///
/// The returned guard flushes pending lines on drop; keep it alive for
/// the whole run. A second call leaves the first subscriber in place.
pub fn init(log_dir: &Path, verbose: bool) -> Result<WorkerGuard> {
    fs::create_dir_all(log_dir)?;
    let file_appender = tracing_appender::rolling::daily(log_dir, LOG_FILE);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let installed = tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_env_filter(filter(verbose))
        .try_init();
    if installed.is_ok() {
        tracing::debug!(dir = %log_dir.display(), "logging initialized");
    }

    Ok(guard)
}
