//! Process-wide log sink
//!
//! [`init_tracing`] installs the global `tracing` subscriber once at startup and
//! hands back a [`TracingGuard`]. Passing the guard to [`shutdown_tracing`]
//! flushes the log file before the process exits. Handlers never reference the
//! sink directly: they emit `tracing` events, so tests can install their own
//! subscriber with `tracing::subscriber::set_default`.

use std::fs::{self, File, OpenOptions};
use std::sync::Arc;

use tracing_subscriber::{
    fmt::writer::{BoxMakeWriter, MakeWriterExt},
    EnvFilter,
};

use crate::{
    config::{Config, LogFormat, LoggingConfig},
    error::{Error, Result},
};

/// Keeps the file sink alive until shutdown
#[derive(Debug, Default)]
pub struct TracingGuard {
    log_file: Option<Arc<File>>,
}

impl TracingGuard {
    /// Whether log lines are also written to a file
    pub fn has_file_sink(&self) -> bool {
        self.log_file.is_some()
    }
}

/// Build the level filter: `RUST_LOG` wins, then `service.log_level`, then `info`
pub fn env_filter(log_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initialize the global subscriber (stdout, plus the log file when enabled)
pub fn init_tracing(config: &Config) -> Result<TracingGuard> {
    let log_file = if config.logging.file_enabled {
        Some(Arc::new(open_log_file(&config.logging)?))
    } else {
        None
    };

    let writer = match &log_file {
        Some(file) => BoxMakeWriter::new(std::io::stdout.and(Arc::clone(file))),
        None => BoxMakeWriter::new(std::io::stdout),
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(&config.service.log_level))
        .with_writer(writer)
        .with_ansi(log_file.is_none());

    let installed = match config.logging.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
    };
    installed.map_err(|e| Error::Internal(format!("Failed to install tracing subscriber: {}", e)))?;

    tracing::info!(
        service = %config.service.name,
        environment = %config.service.environment,
        file = ?log_file.as_ref().map(|_| config.logging.file_path()),
        "Tracing initialized"
    );

    Ok(TracingGuard { log_file })
}

/// Flush the file sink; call once right before the process exits
pub fn shutdown_tracing(guard: TracingGuard) {
    tracing::info!("Tracing shutdown");
    if let Some(file) = guard.log_file {
        if let Err(e) = file.sync_all() {
            eprintln!("Failed to flush log file: {}", e);
        }
    }
}

fn open_log_file(logging: &LoggingConfig) -> Result<File> {
    fs::create_dir_all(&logging.directory)?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(logging.file_path())?;
    Ok(file)
}
