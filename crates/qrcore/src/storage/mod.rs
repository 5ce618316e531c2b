//! In-memory stores for user settings and usage statistics
//!
//! Nothing here is persisted: a restart starts from empty stores.

pub mod settings;
pub mod stats;

pub use settings::{SettingsStore, UserSettings};
pub use stats::{StatsStore, UserStats};
