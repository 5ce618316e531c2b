use thiserror::Error;

use crate::render::RenderError;

/// Centralized error types for the bot
///
/// All errors surfaced by handlers are converted to this enum for consistent
/// logging in the dispatcher. Uses `thiserror` for conversions and display.
///
/// # Example
///
/// ```no_run
/// use qrcore::error::AppError;
///
/// fn handle_error(err: AppError) {
///     eprintln!("Error: {}", err);
/// }
/// ```
#[derive(Error, Debug)]
pub enum AppError {
    /// Missing or malformed configuration (fatal at startup)
    #[error("Configuration error: {0}")]
    Config(String),

    /// QR rendering errors
    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    /// Telegram API errors
    #[cfg(feature = "telegram")]
    #[error("Telegram error: {0}")]
    Telegram(#[from] teloxide::RequestError),

    /// Outbound delivery errors from non-Telegram messengers
    #[error("Messaging error: {0}")]
    Messaging(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;
