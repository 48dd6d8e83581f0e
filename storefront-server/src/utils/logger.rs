//! Logging Infrastructure
//!
//! Console output is pretty in development and JSON lines when requested.
//! With a log directory the same events also go to a daily rolling file.
//! `RUST_LOG` takes precedence over the configured level.

use std::path::Path;

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Prefix of rolled log files (`storefront.2025-06-02.log`)
pub const LOG_FILE_PREFIX: &str = "storefront";

/// Rolled files kept on disk
const MAX_LOG_FILES: usize = 14;

/// Initialize the logger with optional JSON output and file output
pub fn init_logger_with_file(
    log_level: Option<&str>,
    json: bool,
    log_dir: Option<&str>,
) -> anyhow::Result<()> {
    let level = log_level.unwrap_or("info");
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(level))?;

    let console = if json {
        fmt::layer().json().with_target(false).boxed()
    } else {
        fmt::layer().with_target(false).boxed()
    };

    let file = match log_dir {
        Some(dir) => Some(
            fmt::layer()
                .with_ansi(false)
                .with_target(false)
                .with_writer(file_appender(Path::new(dir))?),
        ),
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console)
        .with(file)
        .try_init()?;

    Ok(())
}

/// Daily rolling appender under `dir`, creating it if missing
pub fn file_appender(dir: &Path) -> anyhow::Result<RollingFileAppender> {
    std::fs::create_dir_all(dir)?;

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE_PREFIX)
        .filename_suffix("log")
        .max_log_files(MAX_LOG_FILES)
        .build(dir)?;

    Ok(appender)
}
