//! Per-user dialog state

use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display};

/// Where a user is in a multi-step flow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum DialogState {
    #[default]
    Idle,
    AwaitingFillColor,
    AwaitingBackColor,
    /// Admin only, entered from the admin panel
    AwaitingBroadcastText,
}

/// Transient dialog states. `Idle` is never stored.
#[derive(Debug, Default)]
pub struct DialogStore {
    inner: DashMap<i64, DialogState>,
}

impl DialogStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, user_id: i64) -> DialogState {
        self.inner.get(&user_id).map(|s| *s).unwrap_or_default()
    }

    /// Moves the user to `state`, returning the previous one
    pub fn set(&self, user_id: i64, state: DialogState) -> DialogState {
        let previous = if state == DialogState::Idle {
            self.inner.remove(&user_id).map(|(_, s)| s)
        } else {
            self.inner.insert(user_id, state)
        };
        let previous = previous.unwrap_or_default();
        if previous != state {
            log::debug!("Dialog state for user {}: {} -> {}", user_id, previous, state);
        }
        previous
    }

    pub fn clear(&self, user_id: i64) -> DialogState {
        self.set(user_id, DialogState::Idle)
    }

    /// Number of users in the middle of a flow
    pub fn active(&self) -> usize {
        self.inner.len()
    }
}
