use dashmap::mapref::entry::Entry as Slot;
use dashmap::DashMap;
use tracing::{debug, info, warn};

use crate::config::StoreConfig;
use crate::entry::Entry;
use crate::metrics::{StoreMetrics, StoreStats};
use crate::time::now_ms;
use crate::token::SessionToken;

/// Thread-safe token -> principal registry.
///
/// Backed by a sharded `DashMap`, so create/get/expire from concurrent
/// request handlers never observe a half-written entry. Share it behind an
/// `Arc`; there is no global instance.
pub struct SessionStore<P> {
    map: DashMap<SessionToken, Entry<P>>,
    idle_timeout_ms: Option<u64>,
    metrics: StoreMetrics,
}

impl<P: Clone> Default for SessionStore<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Clone> SessionStore<P> {
    /// Store without time-based expiry.
    pub fn new() -> Self {
        Self::with_config(&StoreConfig::default())
    }

    pub fn with_config(cfg: &StoreConfig) -> Self {
        let idle_timeout_ms = cfg.idle_timeout.map(|d| d.as_millis() as u64);
        info!(
            "Initializing session store (idle timeout: {})",
            idle_timeout_ms
                .map(|ms| format!("{}ms", ms))
                .unwrap_or_else(|| "none".to_string())
        );
        Self {
            map: DashMap::new(),
            idle_timeout_ms,
            metrics: StoreMetrics::default(),
        }
    }

    /// Store `value` under a freshly generated token and return the token.
    pub fn create_session(&self, value: P) -> SessionToken {
        self.create_session_at(value, now_ms())
    }

    fn create_session_at(&self, value: P, now: u64) -> SessionToken {
        let token = loop {
            let candidate = SessionToken::generate();
            if let Slot::Vacant(slot) = self.map.entry(candidate) {
                let token = slot.key().clone();
                slot.insert(Entry::new(value, now));
                break token;
            }
            warn!("Session token collision, regenerating");
        };
        self.metrics.inc_created();
        debug!("Created session {}", token.short());
        token
    }

    /// Resolve a token to its principal. `None` for unknown or expired tokens.
    pub fn get_session(&self, token: &str) -> Option<P> {
        self.get_session_at(token, now_ms())
    }

    fn get_session_at(&self, token: &str, now: u64) -> Option<P> {
        let Some(entry) = self.map.get(token) else {
            self.metrics.inc_miss();
            return None;
        };

        if self.is_idle(&entry, now) {
            drop(entry); // release shard read lock before removing
            // Another request may have touched it in between.
            if self.map.remove_if(token, |_, e| self.is_idle(e, now)).is_some() {
                self.metrics.inc_reaped(1);
                debug!("Session {} idle-expired on lookup", short(token));
                self.metrics.inc_miss();
                return None;
            }
            return self.get_session_at(token, now);
        }

        entry.touch(now);
        self.metrics.inc_hit();
        Some(entry.value.clone())
    }

    /// Remove the session for `token`. Unknown tokens are a no-op.
    /// Returns whether an entry was removed.
    pub fn expire(&self, token: &str) -> bool {
        let removed = self.map.remove(token).is_some();
        if removed {
            self.metrics.inc_expired();
            debug!("Expired session {}", short(token));
        }
        removed
    }

    /// Drop every entry idle longer than the configured timeout.
    /// Returns the number removed (always 0 without an idle timeout).
    pub fn reap_idle(&self) -> usize {
        self.reap_idle_at(now_ms())
    }

    fn reap_idle_at(&self, now: u64) -> usize {
        let Some(timeout_ms) = self.idle_timeout_ms else {
            return 0;
        };

        let mut removed = 0usize;
        self.map.retain(|_, e| {
            let idle = e.is_idle(now, timeout_ms);
            if idle {
                removed += 1;
            }
            !idle
        });

        if removed > 0 {
            self.metrics.inc_reaped(removed as u64);
            info!("Reaped {} idle sessions", removed);
        }
        removed
    }

    pub fn idle_timeout_enabled(&self) -> bool {
        self.idle_timeout_ms.is_some()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn stats(&self) -> StoreStats {
        self.metrics.snapshot(self.len())
    }

    fn is_idle(&self, entry: &Entry<P>, now: u64) -> bool {
        match self.idle_timeout_ms {
            Some(timeout_ms) => entry.is_idle(now, timeout_ms),
            None => false,
        }
    }
}

fn short(token: &str) -> &str {
    token.get(..8).unwrap_or(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;
    use std::thread;
    use std::time::Duration;

    #[derive(Debug, Clone, PartialEq)]
    struct User {
        id: u64,
        name: String,
    }

    fn user(id: u64) -> User {
        User { id, name: format!("user-{}", id) }
    }

    #[test]
    fn test_create_then_get_returns_value() {
        let store = SessionStore::new();
        let token = store.create_session(user(1));

        assert_eq!(store.get_session(token.as_str()), Some(user(1)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_unknown_token_is_not_found() {
        let store: SessionStore<User> = SessionStore::new();
        store.create_session(user(1));

        assert_eq!(store.get_session("not-a-token"), None);
        assert_eq!(store.get_session(""), None);
        assert_eq!(store.get_session(SessionToken::generate().as_str()), None);
    }

    #[test]
    fn test_expire_removes_entry() {
        let store = SessionStore::new();
        let token = store.create_session(user(1));

        assert!(store.expire(token.as_str()));
        assert_eq!(store.get_session(token.as_str()), None);
        assert!(store.is_empty());
    }

    #[test]
    fn test_expire_is_idempotent_and_isolated() {
        let store = SessionStore::new();
        let keep = store.create_session(user(1));
        let gone = store.create_session(user(2));

        assert!(store.expire(gone.as_str()));
        assert!(!store.expire(gone.as_str()));
        assert!(!store.expire("never-issued"));

        assert_eq!(store.get_session(keep.as_str()), Some(user(1)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_equal_values_get_distinct_tokens() {
        let store = SessionStore::new();
        let a = store.create_session(user(7));
        let b = store.create_session(user(7));

        assert_ne!(a, b);
        assert_eq!(store.len(), 2);

        store.expire(a.as_str());
        assert_eq!(store.get_session(a.as_str()), None);
        assert_eq!(store.get_session(b.as_str()), Some(user(7)));
    }

    #[test]
    fn test_concurrent_creates_are_unique_and_kept() {
        const THREADS: usize = 8;
        const PER_THREAD: usize = 250;

        let store = Arc::new(SessionStore::new());
        let handles: Vec<_> = (0..THREADS)
            .map(|t| {
                let store = store.clone();
                thread::spawn(move || {
                    (0..PER_THREAD)
                        .map(|i| {
                            let id = (t * PER_THREAD + i) as u64;
                            (store.create_session(user(id)), id)
                        })
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let mut all = Vec::new();
        for h in handles {
            all.extend(h.join().expect("worker panicked"));
        }

        let unique: HashSet<_> = all.iter().map(|(t, _)| t.clone()).collect();
        assert_eq!(unique.len(), THREADS * PER_THREAD);
        assert_eq!(store.len(), THREADS * PER_THREAD);

        for (token, id) in &all {
            assert_eq!(store.get_session(token.as_str()).map(|u| u.id), Some(*id));
        }
    }

    #[test]
    fn test_concurrent_mixed_operations() {
        let store = Arc::new(SessionStore::new());
        let stable = store.create_session(user(0));

        let handles: Vec<_> = (0..4)
            .map(|t| {
                let store = store.clone();
                thread::spawn(move || {
                    for i in 0..200u64 {
                        let token = store.create_session(user(t * 1000 + i));
                        assert!(store.get_session(token.as_str()).is_some());
                        assert!(store.expire(token.as_str()));
                        assert!(store.get_session(token.as_str()).is_none());
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().expect("worker panicked");
        }

        assert_eq!(store.len(), 1);
        assert_eq!(store.get_session(stable.as_str()), Some(user(0)));
    }

    #[test]
    fn test_no_time_based_expiry_by_default() {
        let store = SessionStore::new();
        let token = store.create_session_at(user(1), 0);

        assert!(!store.idle_timeout_enabled());
        assert_eq!(store.reap_idle_at(u64::MAX), 0);
        assert_eq!(store.get_session_at(token.as_str(), u64::MAX), Some(user(1)));
    }

    #[test]
    fn test_idle_entry_is_not_returned() {
        let cfg = StoreConfig::default().with_idle_timeout(Duration::from_millis(1_000));
        let store = SessionStore::with_config(&cfg);
        let token = store.create_session_at(user(1), 10_000);

        assert_eq!(store.get_session_at(token.as_str(), 10_500), Some(user(1)));
        // last access was 10_500
        assert_eq!(store.get_session_at(token.as_str(), 11_400), Some(user(1)));
        assert_eq!(store.get_session_at(token.as_str(), 12_500), None);
        assert!(store.is_empty());
        assert_eq!(store.stats().reaped_total, 1);
    }

    #[test]
    fn test_reap_idle_keeps_recently_used() {
        let cfg = StoreConfig::default().with_idle_timeout(Duration::from_millis(1_000));
        let store = SessionStore::with_config(&cfg);
        let stale = store.create_session_at(user(1), 0);
        let fresh = store.create_session_at(user(2), 0);

        // Touched while still inside the timeout.
        assert_eq!(store.get_session_at(fresh.as_str(), 900), Some(user(2)));
        let touched = store
            .map
            .get(fresh.as_str())
            .map(|e| e.touched_ms.load(std::sync::atomic::Ordering::Relaxed));
        assert_eq!(touched, Some(900));

        assert_eq!(store.reap_idle_at(1_500), 1);
        assert_eq!(store.len(), 1);
        assert_eq!(store.get_session_at(stale.as_str(), 1_500), None);
        assert_eq!(store.get_session_at(fresh.as_str(), 1_500), Some(user(2)));
    }

    #[test]
    fn test_lookup_past_timeout_removes_instead_of_touching() {
        let cfg = StoreConfig::default().with_idle_timeout(Duration::from_millis(1_000));
        let store = SessionStore::with_config(&cfg);
        let token = store.create_session_at(user(1), 0);

        assert_eq!(store.get_session_at(token.as_str(), 1_800), None);
        assert_eq!(store.reap_idle_at(2_000), 0);
        assert!(store.is_empty());
    }

    #[test]
    fn test_stats_counters() {
        let store = SessionStore::new();
        let a = store.create_session(user(1));
        store.create_session(user(2));

        store.get_session(a.as_str());
        store.get_session("missing");
        store.expire(a.as_str());
        store.expire(a.as_str());

        let stats = store.stats();
        assert_eq!(stats.active_sessions, 1);
        assert_eq!(stats.created_total, 2);
        assert_eq!(stats.hits_total, 1);
        assert_eq!(stats.misses_total, 1);
        assert_eq!(stats.expired_total, 1);
        assert_eq!(stats.reaped_total, 0);
    }
}
