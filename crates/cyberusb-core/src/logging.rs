//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Environment variable that overrides the default log filter
pub const LOG_ENV_VAR: &str = "CYBERUSB_LOG";

const DEFAULT_FILTER: &str = "cyber_usb=info,cyberusb_app=info,cyberusb_tui=info,warn";

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/cyber-usb/logs/`, one file per day.
/// Log level is controlled by the `CYBERUSB_LOG` environment variable.
///
/// # Examples
/// ```bash
/// CYBERUSB_LOG=debug cyberusb
/// CYBERUSB_LOG=cyberusb_app=trace cyberusb
/// ```
pub fn init() -> Result<()> {
    let log_dir = get_log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "cyberusb.log");

    let env_filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!("═══════════════════════════════════════════════════════");
    tracing::info!("Cyber USB Toolkit starting");
    tracing::info!("Log directory: {}", log_dir.display());
    tracing::info!("═══════════════════════════════════════════════════════");

    Ok(())
}

/// Get the log directory path
pub fn get_log_directory() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("cyber-usb").join("logs")
}
