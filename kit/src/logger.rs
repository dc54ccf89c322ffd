use std::path::Path;

use anyhow::{Context, Result};

use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{
    EnvFilter, Layer, Registry,
    fmt::{self, time::UtcTime},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

use crate::config::LogLevel;

fn filter(level: LogLevel) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()))
}

/// Console output to stderr, plus an hourly rolling `labels.log` when
/// `log_dir` is set. Keep the returned guard alive until exit so buffered
/// file output is flushed.
///
/// Fails when the log directory cannot be created or a global subscriber
/// is already installed.
pub fn init_tracing(level: LogLevel, log_dir: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let console_layer = fmt::layer()
        .with_ansi(false)
        .with_timer(UtcTime::rfc_3339())
        .with_writer(std::io::stderr)
        .with_filter(filter(level));

    let Some(log_dir) = log_dir else {
        Registry::default()
            .with(console_layer)
            .try_init()
            .context("failed to install tracing subscriber")?;
        return Ok(None);
    };

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::HOURLY)
        .filename_prefix("labels.log")
        .build(log_dir)
        .with_context(|| format!("failed to open log directory {}", log_dir.display()))?;
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    let file_layer = fmt::layer()
        .with_ansi(false)
        .with_timer(UtcTime::rfc_3339())
        .with_line_number(true)
        .with_writer(non_blocking)
        .with_filter(filter(level));

    Registry::default()
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;

    Ok(Some(guard))
}
