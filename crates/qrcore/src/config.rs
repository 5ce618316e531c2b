use once_cell::sync::Lazy;
use secrecy::SecretString;
use std::env;
use std::time::Duration;

use crate::error::{AppError, AppResult};

/// Log file path
/// Read from LOG_FILE_PATH environment variable
/// Default: qrbot.log
pub static LOG_FILE_PATH: Lazy<String> =
    Lazy::new(|| env::var("LOG_FILE_PATH").unwrap_or_else(|_| "qrbot.log".to_string()));

/// Bot token
/// Read from BOT_TOKEN or TELOXIDE_TOKEN environment variable
pub static BOT_TOKEN: Lazy<String> = Lazy::new(|| {
    env::var("BOT_TOKEN")
        .or_else(|_| env::var("TELOXIDE_TOKEN"))
        .unwrap_or_else(|_| String::new())
});

/// Returns the bot token, failing when it is not configured.
///
/// The bot cannot start without a token, so callers treat this error as fatal.
pub fn bot_token() -> AppResult<SecretString> {
    token_from(&BOT_TOKEN)
}

fn token_from(raw: &str) -> AppResult<SecretString> {
    let token = raw.trim();
    if token.is_empty() {
        return Err(AppError::Config(
            "BOT_TOKEN environment variable not set".to_string(),
        ));
    }
    Ok(SecretString::from(token.to_string()))
}

/// Admin configuration
pub mod admin {
    use once_cell::sync::Lazy;
    use std::env;

    /// Parses a comma (or whitespace) separated list of Telegram user ids.
    /// Entries that are not integers are skipped.
    pub fn parse_admin_ids(raw: &str) -> Vec<i64> {
        raw.split([',', ' ', '\n', '\t'])
            .filter_map(|part| part.trim().parse::<i64>().ok())
            .collect()
    }

    /// Admin user IDs (comma-separated)
    /// Read from ADMIN_IDS environment variable, empty when unset
    pub static ADMIN_IDS: Lazy<Vec<i64>> = Lazy::new(|| {
        env::var("ADMIN_IDS")
            .ok()
            .map(|raw| parse_admin_ids(&raw))
            .unwrap_or_default()
    });
}

/// QR rendering configuration
pub mod qr {
    /// Pixels per QR module
    pub const BOX_SIZE: u32 = 10;

    /// Quiet zone width in modules
    pub const BORDER: u32 = 4;

    /// File name of the PNG attachment
    pub const FILE_NAME: &str = "qr_code.png";
}

/// Admin panel configuration
pub mod panel {
    /// How many users the "recent users" view lists
    pub const RECENT_USERS_LIMIT: usize = 10;
}

/// Network configuration
pub mod network {
    use super::Duration;

    /// Request timeout for Bot API calls (in seconds)
    pub const REQUEST_TIMEOUT_SECS: u64 = 60;

    /// Request timeout duration
    pub fn timeout() -> Duration {
        Duration::from_secs(REQUEST_TIMEOUT_SECS)
    }

    /// Maximum attempts for the startup `getMe` probe
    pub const STARTUP_MAX_RETRIES: usize = 5;
}
