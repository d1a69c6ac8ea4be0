use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

const LOG_FILE_ENV: &str = "PROMPT_QUEUE_LOG_FILE";
const LOG_FILE_NAME: &str = "prompt-queue.log";
const DEFAULT_FILTER: &str = "info";

/// Where logs go: `PROMPT_QUEUE_LOG_FILE` if set, otherwise a file in the data dir
pub(crate) fn log_file_path(data_dir: &Path) -> PathBuf {
    match std::env::var(LOG_FILE_ENV) {
        Ok(path) if !path.is_empty() => PathBuf::from(path),
        _ => data_dir.join(LOG_FILE_NAME),
    }
}

/// Install a file-backed fmt subscriber filtered by `RUST_LOG` (default `info`).
/// The terminal belongs to the UI, so nothing is written to stdout or stderr.
pub(crate) fn init_tracing(data_dir: &Path) -> Result<PathBuf> {
    let log_path = log_file_path(data_dir);
    if let Some(parent) = log_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating log directory {}", parent.display()))?;
        }
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("opening log file {}", log_path.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_filter(filter);

    tracing_subscriber::registry().with(file_layer).init();
    Ok(log_path)
}
