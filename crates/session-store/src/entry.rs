use std::sync::atomic::{AtomicU64, Ordering};

pub struct Entry<P> {
    pub value: P,
    pub touched_ms: AtomicU64,
}

impl<P> Entry<P> {
    pub fn new(value: P, now: u64) -> Self {
        Self {
            value,
            touched_ms: AtomicU64::new(now),
        }
    }

    pub fn touch(&self, now: u64) {
        self.touched_ms.fetch_max(now, Ordering::Relaxed);
    }

    pub fn idle_ms(&self, now: u64) -> u64 {
        now.saturating_sub(self.touched_ms.load(Ordering::Relaxed))
    }

    pub fn is_idle(&self, now: u64, timeout_ms: u64) -> bool {
        self.idle_ms(now) > timeout_ms
    }
}
