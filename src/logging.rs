use std::path::PathBuf;

use tracing::level_filters::LevelFilter;
use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{InitError, RollingFileAppender, Rotation},
};

/// Environment variable selecting the maximum log level (`error` through `trace`, or `off`).
pub const LOG_ENV: &str = "MAZEGRAPH_LOG";
/// Environment variable selecting the directory that holds the log file.
pub const LOG_DIR_ENV: &str = "MAZEGRAPH_LOG_DIR";

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("cannot open the log file: {0}")]
    File(#[from] InitError),
    #[error("cannot install the log subscriber: {0}")]
    Subscriber(Box<dyn std::error::Error + Send + Sync>),
}

/// Reads the maximum log level from the environment, defaulting to `info`.
pub fn level_from_env() -> LevelFilter {
    std::env::var(LOG_ENV)
        .ok()
        .and_then(|level| level.trim().parse().ok())
        .unwrap_or(LevelFilter::INFO)
}

/// Sends log events to `file_name` in the log directory, since stdout carries the maze.
///
/// The returned guard flushes pending events when dropped and must be kept alive
/// until the program exits.
pub fn init(file_name: &str) -> Result<WorkerGuard, LoggingError> {
    let dir = std::env::var_os(LOG_DIR_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(std::env::temp_dir);
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(dir)?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .with_max_level(level_from_env())
        .try_init()
        .map_err(LoggingError::Subscriber)?;
    Ok(guard)
}
