//! Per-user QR color settings

use dashmap::DashMap;
use serde::{Deserialize, Serialize};

use crate::color::HexColor;

/// Colors a user picked through the design dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSettings {
    pub fill_color: HexColor,
    pub back_color: HexColor,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            fill_color: HexColor::black(),
            back_color: HexColor::white(),
        }
    }
}

/// In-memory settings keyed by Telegram user id.
///
/// A missing entry means the default black-on-white design.
#[derive(Debug, Default)]
pub struct SettingsStore {
    inner: DashMap<i64, UserSettings>,
}

impl SettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored settings, if the user ever picked colors
    pub fn get(&self, user_id: i64) -> Option<UserSettings> {
        self.inner.get(&user_id).map(|entry| entry.value().clone())
    }

    /// Stored settings or the default design
    pub fn effective(&self, user_id: i64) -> UserSettings {
        self.get(user_id).unwrap_or_default()
    }

    /// First step of a (re)design: replaces the whole entry, so the background
    /// falls back to white until the second step completes.
    pub fn start_design(&self, user_id: i64, fill_color: HexColor) {
        self.inner.insert(
            user_id,
            UserSettings {
                fill_color,
                back_color: HexColor::white(),
            },
        );
    }

    /// Second step of the design dialog
    pub fn set_back_color(&self, user_id: i64, back_color: HexColor) {
        self.inner.entry(user_id).or_default().back_color = back_color;
    }

    /// Removes the user's settings, returning whether any existed
    pub fn remove(&self, user_id: i64) -> bool {
        self.inner.remove(&user_id).is_some()
    }

    /// Drops every user's settings, returning how many were removed
    pub fn clear(&self) -> usize {
        let removed = self.inner.len();
        self.inner.clear();
        removed
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
