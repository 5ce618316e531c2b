//! Logger initialization (console + file)

use std::sync::Mutex;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::error::{AppError, AppResult};

/// Initialize logger for both console and file output
///
/// `RUST_LOG` overrides the default `info` filter. Records emitted through
/// the `log` macros are forwarded to the same subscriber.
///
/// # Arguments
/// * `log_file_path` - Path to the log file, truncated on startup
///
/// # Returns
/// * `Err(AppError::Io)` - The log file could not be created
/// * `Err(AppError::Config)` - A global logger is already installed
pub fn init_logger(log_file_path: &str) -> AppResult<()> {
    let log_file = fs_err::File::create(log_file_path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(log_file)))
        .try_init()
        .map_err(|e| AppError::Config(format!("Failed to initialize logger: {}", e)))?;

    Ok(())
}
