use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Default)]
pub struct StoreMetrics {
    pub created_total: AtomicU64,
    pub hits_total: AtomicU64,
    pub misses_total: AtomicU64,
    pub expired_total: AtomicU64,
    pub reaped_total: AtomicU64,
}

impl StoreMetrics {
    pub fn inc_created(&self) {
        self.created_total.fetch_add(1, Ordering::Relaxed);
    }
    pub fn inc_hit(&self) {
        self.hits_total.fetch_add(1, Ordering::Relaxed);
    }
    pub fn inc_miss(&self) {
        self.misses_total.fetch_add(1, Ordering::Relaxed);
    }
    pub fn inc_expired(&self) {
        self.expired_total.fetch_add(1, Ordering::Relaxed);
    }
    pub fn inc_reaped(&self, n: u64) {
        self.reaped_total.fetch_add(n, Ordering::Relaxed);
    }

    pub fn snapshot(&self, active_sessions: usize) -> StoreStats {
        StoreStats {
            active_sessions,
            created_total: self.created_total.load(Ordering::Relaxed),
            hits_total: self.hits_total.load(Ordering::Relaxed),
            misses_total: self.misses_total.load(Ordering::Relaxed),
            expired_total: self.expired_total.load(Ordering::Relaxed),
            reaped_total: self.reaped_total.load(Ordering::Relaxed),
        }
    }
}

/// Point-in-time view of the store counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreStats {
    pub active_sessions: usize,
    pub created_total: u64,
    pub hits_total: u64,
    pub misses_total: u64,
    /// Removed by explicit logout.
    pub expired_total: u64,
    /// Removed by the idle reaper.
    pub reaped_total: u64,
}
