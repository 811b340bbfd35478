//! Tracing setup shared by the server and CLI binaries

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_appender::{non_blocking, rolling};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ServerConfig;

pub const LOG_FILE_NAME: &str = "file-search.log";

/// RUST_LOG when set and valid, otherwise `fallback`
pub fn env_filter(fallback: &str) -> Result<EnvFilter> {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback))
        .with_context(|| format!("Invalid log filter: {}", fallback))
}

/// Console output on stderr plus a daily rolling file in `config.log_dir`.
///
/// stdout belongs to the MCP transport and must stay clean. The returned
/// guards flush the non-blocking writers and must outlive the server.
pub fn init_server_logging(config: &ServerConfig) -> Result<Vec<WorkerGuard>> {
    let filter = env_filter(&config.log_filter)?;

    fs::create_dir_all(&config.log_dir).with_context(|| {
        format!("Failed to create logs directory {}", config.log_dir.display())
    })?;

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE_NAME)
        .build(&config.log_dir)
        .context("Failed to create log file appender")?;
    let (non_blocking_file, file_guard) = non_blocking(file_appender);
    let (non_blocking_console, console_guard) = non_blocking(std::io::stderr());

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking_console)
                .with_target(false)
                .with_ansi(false),
        )
        .with(
            fmt::layer()
                .with_writer(non_blocking_file)
                .with_target(true)
                .with_ansi(false)
                .with_file(true)
                .with_line_number(true),
        )
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(vec![file_guard, console_guard])
}

/// Warnings to stderr, or everything at info+ to `log_path` when given
pub fn init_cli_logging(log_path: Option<&PathBuf>) -> Result<()> {
    use tracing_subscriber::fmt::writer::MakeWriterExt;

    if let Some(log_file) = log_path {
        let filter = env_filter("info")?;
        let file_appender = rolling::never(
            log_file.parent().unwrap_or_else(|| Path::new(".")),
            log_file
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or(LOG_FILE_NAME),
        );

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(file_appender.and(std::io::stderr.with_max_level(tracing::Level::WARN)))
            .try_init()
            .map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {}", e))?;
    } else {
        let filter = env_filter("warn")?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {}", e))?;
    }

    Ok(())
}
