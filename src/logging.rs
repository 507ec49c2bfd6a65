use anyhow::{anyhow, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Name of the log file inside the log directory
pub const LOG_FILE_NAME: &str = "tomato.log";

/// Default log directory: the platform cache dir, or the current dir as a fallback
pub fn default_log_dir() -> PathBuf {
    dirs::cache_dir()
        .map(|dir| dir.join("tomato"))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Install a file-backed tracing subscriber.
///
/// The terminal belongs to the UI, so events go to `<dir>/tomato.log`.
/// The returned guard flushes pending lines when dropped and must be
/// held until exit.
pub fn init_tracing(log_level: &str, log_dir: &Path) -> Result<WorkerGuard> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;

    fs::create_dir_all(log_dir)
        .with_context(|| format!("create log directory {}", log_dir.display()))?;
    let appender = tracing_appender::rolling::never(log_dir, LOG_FILE_NAME);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;

    Ok(guard)
}
