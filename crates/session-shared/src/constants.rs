//! Application-wide constants

pub const SESSION_COOKIE_NAME: &str = "sessionToken";
pub const DEFAULT_REDIRECT_URI: &str = "/";
pub const DEFAULT_REAP_INTERVAL_SECS: u64 = 60;
pub const DEFAULT_APP_ENV: &str = "development";
