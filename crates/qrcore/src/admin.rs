//! Admin authorization and aggregate statistics

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::config::admin::ADMIN_IDS;
use crate::storage::StatsStore;

/// Fixed set of administrator user ids
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdminSet {
    ids: BTreeSet<i64>,
}

impl AdminSet {
    pub fn new(ids: impl IntoIterator<Item = i64>) -> Self {
        Self {
            ids: ids.into_iter().collect(),
        }
    }

    /// Admins from the ADMIN_IDS environment variable
    pub fn from_config() -> Self {
        Self::new(ADMIN_IDS.iter().copied())
    }

    /// Check if user is admin
    pub fn is_admin(&self, user_id: i64) -> bool {
        self.ids.contains(&user_id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Numbers shown by the admin "Stats" view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdminStats {
    pub users_count: usize,
    pub qr_total: u64,
    pub active_today: usize,
    pub admins_count: usize,
}

impl AdminStats {
    pub fn compute(stats: &StatsStore, admins: &AdminSet, today: NaiveDate) -> Self {
        Self {
            users_count: stats.len(),
            qr_total: stats.total_generations(),
            active_today: stats.active_on(today),
            admins_count: admins.len(),
        }
    }
}
