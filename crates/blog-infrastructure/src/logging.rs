//! Structured logging with tracing
//!
//! Centralized subscriber setup: level filter (overridable through `BLOG_LOG`),
//! text or JSON output, and an optional daily-rotated log file.

use crate::constants::{DEFAULT_LOG_FILE_PREFIX, LOG_ENV_FILTER};
use blog_domain::error::{Error, Result};
use std::path::Path;
use tracing::{Level, info, warn};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub use crate::config::LoggingConfig;

/// Initialize logging with the provided configuration
///
/// Fails if a global subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let level = parse_log_level(&config.level)?;
    let filter =
        EnvFilter::try_from_env(LOG_ENV_FILTER).unwrap_or_else(|_| EnvFilter::new(&config.level));

    let file_appender = config
        .file_output
        .as_deref()
        .map(|path| file_appender(path, config.max_files))
        .transpose()?;

    // Layer types differ between JSON and text, hence two branches
    let registry = Registry::default().with(filter);
    let result = if config.json_format {
        let stdout = fmt::layer()
            .json()
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true);
        let file = file_appender.map(|appender| {
            fmt::layer()
                .json()
                .with_writer(appender)
                .with_ansi(false)
                .with_target(true)
        });
        registry.with(stdout).with(file).try_init()
    } else {
        let stdout = fmt::layer()
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true);
        let file = file_appender.map(|appender| {
            fmt::layer()
                .with_writer(appender)
                .with_ansi(false)
                .with_target(true)
        });
        registry.with(stdout).with(file).try_init()
    };
    result.map_err(|e| Error::Configuration {
        message: format!("Failed to install tracing subscriber: {e}"),
        source: Some(Box::new(e)),
    })?;

    info!("Logging initialized with level: {}", level);
    Ok(())
}

fn file_appender(path: &Path, max_files: usize) -> Result<RollingFileAppender> {
    let directory = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let prefix = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or(DEFAULT_LOG_FILE_PREFIX);

    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(prefix)
        .max_log_files(max_files)
        .build(directory)
        .map_err(|e| Error::Configuration {
            message: format!("Failed to open log file in {}: {e}", directory.display()),
            source: Some(Box::new(e)),
        })
}

/// Parse log level string to tracing Level
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" | "warning" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(Error::Configuration {
            message: format!("Invalid log level: {level}. Use trace, debug, info, warn, or error"),
            source: None,
        }),
    }
}

/// Log configuration loading status
pub fn log_config_loaded(config_path: &Path, success: bool) {
    if success {
        info!("Configuration loaded from {}", config_path.display());
    } else {
        warn!("Configuration file not found: {}", config_path.display());
    }
}
