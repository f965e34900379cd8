use std::time::Duration;

/// Store tuning.
///
/// `idle_timeout = None` (the default) means sessions live until they are
/// expired explicitly or the process exits.
#[derive(Clone, Debug)]
pub struct StoreConfig {
    pub idle_timeout: Option<Duration>,
    pub reap_interval: Duration,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            idle_timeout: None,
            reap_interval: Duration::from_secs(60),
        }
    }
}

impl StoreConfig {
    pub fn with_idle_timeout(mut self, timeout: Duration) -> Self {
        self.idle_timeout = Some(timeout);
        self
    }

    pub fn with_reap_interval(mut self, interval: Duration) -> Self {
        self.reap_interval = interval;
        self
    }
}
