//! Logging initialization for the kiosk.
//!
//! The TUI owns the terminal, so logs go to
//! `<logging.dir>/klassvough-{datetime}.log` unless file logging is disabled.

use anyhow::Result;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;

/// Result of logging initialization
pub struct LoggingHandle {
    /// Flushes buffered logs when dropped. Keep alive until exit.
    pub _guard: Option<WorkerGuard>,

    /// Path to the log file, when logging to a file
    pub log_file_path: Option<PathBuf>,
}

/// Level filter directive: `--debug` wins over the configured level.
fn log_level(config: &Config, debug_override: bool) -> String {
    if debug_override {
        "debug".to_string()
    } else {
        config.logging.level.clone()
    }
}

fn log_file_name(now: chrono::DateTime<chrono::Utc>) -> String {
    format!("klassvough-{}.log", now.format("%Y%m%dT%H%M%SZ"))
}

/// Initialize logging. `RUST_LOG`, when set, replaces the level filter.
pub fn init_logging(config: &Config, debug_override: bool) -> Result<LoggingHandle> {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or(log_level(config, debug_override)),
    );

    if config.logging.to_file {
        let logs_dir = config.logs_path();
        std::fs::create_dir_all(&logs_dir)?;

        let log_filename = log_file_name(chrono::Utc::now());
        let log_file_path = logs_dir.join(&log_filename);

        let file_appender = tracing_appender::rolling::never(&logs_dir, &log_filename);
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(non_blocking),
            )
            .init();

        Ok(LoggingHandle {
            _guard: Some(guard),
            log_file_path: Some(log_file_path),
        })
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init();

        Ok(LoggingHandle {
            _guard: None,
            log_file_path: None,
        })
    }
}
