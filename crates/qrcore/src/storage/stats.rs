//! Per-user usage counters

use chrono::{DateTime, NaiveDate, Utc};
use dashmap::DashMap;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// Usage statistics for one user. Created on the first successful QR code
/// and never removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserStats {
    pub user_id: i64,
    pub qr_count: u64,
    pub last_active: DateTime<Utc>,
    /// Link of the most recent QR code (used by regenerate/share buttons)
    pub last_url: Option<String>,
}

#[derive(Debug, Default)]
pub struct StatsStore {
    inner: DashMap<i64, UserStats>,
}

impl StatsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a successful generation and returns the updated entry
    pub fn record_generation(&self, user_id: i64, at: DateTime<Utc>, url: &str) -> UserStats {
        let mut entry = self.inner.entry(user_id).or_insert_with(|| UserStats {
            user_id,
            qr_count: 0,
            last_active: at,
            last_url: None,
        });
        entry.qr_count += 1;
        entry.last_active = at;
        entry.last_url = Some(url.to_string());
        entry.value().clone()
    }

    pub fn get(&self, user_id: i64) -> Option<UserStats> {
        self.inner.get(&user_id).map(|entry| entry.value().clone())
    }

    pub fn last_url(&self, user_id: i64) -> Option<String> {
        self.inner.get(&user_id).and_then(|entry| entry.last_url.clone())
    }

    /// Every known user id (broadcast recipients)
    pub fn user_ids(&self) -> Vec<i64> {
        self.inner.iter().map(|entry| *entry.key()).sorted().collect()
    }

    /// Snapshot of all entries
    pub fn all(&self) -> Vec<UserStats> {
        self.inner.iter().map(|entry| entry.value().clone()).collect()
    }

    /// Most recently active users first
    pub fn recent(&self, limit: usize) -> Vec<UserStats> {
        self.all()
            .into_iter()
            .sorted_by(|a, b| b.last_active.cmp(&a.last_active).then(a.user_id.cmp(&b.user_id)))
            .take(limit)
            .collect()
    }

    /// Sum of all users' QR counters
    pub fn total_generations(&self) -> u64 {
        self.inner.iter().map(|entry| entry.qr_count).sum()
    }

    /// Users whose last activity falls on `day` (UTC)
    pub fn active_on(&self, day: NaiveDate) -> usize {
        self.inner
            .iter()
            .filter(|entry| entry.last_active.date_naive() == day)
            .count()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Seeds an entry as-is. Used by tests and for future imports.
    pub fn insert(&self, stats: UserStats) {
        self.inner.insert(stats.user_id, stats);
    }
}
