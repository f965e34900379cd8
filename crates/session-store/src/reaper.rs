use std::sync::Arc;
use tokio::task::JoinHandle;
use tokio::time::{sleep, Duration};

use crate::config::StoreConfig;
use crate::store::SessionStore;

/// Background task that periodically drops idle sessions.
pub struct Reaper<P> {
    store: Arc<SessionStore<P>>,
    interval: Duration,
}

impl<P> Reaper<P>
where
    P: Clone + Send + Sync + 'static,
{
    pub fn new(store: Arc<SessionStore<P>>, cfg: &StoreConfig) -> Self {
        Self {
            store,
            interval: cfg.reap_interval,
        }
    }

    /// Spawn the reaper loop onto the current tokio runtime.
    /// Returns `None` when the store has no idle timeout, since nothing would ever be reaped.
    pub fn spawn(self) -> Option<JoinHandle<()>> {
        if !self.store.idle_timeout_enabled() {
            tracing::info!("Idle timeout disabled, session reaper not started");
            return None;
        }
        tracing::info!("Starting session reaper (interval: {:?})", self.interval);
        Some(tokio::spawn(self.run()))
    }

    pub async fn run(self) {
        loop {
            sleep(self.interval).await;
            let reaped = self.store.reap_idle();
            if reaped > 0 {
                tracing::debug!(
                    "Reaper pass removed {} sessions, {} remaining",
                    reaped,
                    self.store.len()
                );
            }
        }
    }
}
