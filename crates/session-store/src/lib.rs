//! # Session Store
//!
//! In-process registry mapping opaque session tokens to a principal value.
//! Transport agnostic: callers hand tokens in and out as plain strings.

pub mod config;
pub mod entry;
pub mod metrics;
pub mod reaper;
pub mod store;
pub mod token;
mod time;

pub use config::StoreConfig;
pub use metrics::StoreStats;
pub use reaper::Reaper;
pub use store::SessionStore;
pub use token::SessionToken;
