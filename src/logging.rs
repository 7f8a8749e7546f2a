// logging.rs
//
// sets up tracing for the binary
//
// stderr belongs to the diagnostic lines, so logs go to a file instead

use std::{
    fs,
    path::Path,
};

use anyhow::{
    Context,
    Result,
};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter,
    fmt,
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

const LOG_FILE: &str = "cpdiag.log";
const DEFAULT_FILTER: &str = "cpdiag=info";

/// Installs the global subscriber. Keep the guard alive until exit so buffered logs get flushed.
pub fn init(log_dir: &Path) -> Result<WorkerGuard> {
    fs::create_dir_all(log_dir).with_context(|| format!("Failed to create log directory {log_dir:?}"))?;

    let appender = tracing_appender::rolling::never(log_dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(writer).with_ansi(false).with_target(true))
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(guard)
}
