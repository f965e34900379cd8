//! Telemetry setup

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::constants::DEFAULT_APP_ENV;

/// JSON logs filtered by `RUST_LOG`, falling back to a per-environment default.
pub fn init_telemetry() {
    let app_env = std::env::var("APP_ENV").unwrap_or_else(|_| DEFAULT_APP_ENV.into());
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(&app_env)));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().json())
        .init();
}

// Session create/expire/reap events are logged at debug.
fn default_directives(app_env: &str) -> &'static str {
    match app_env {
        "production" => "info",
        _ => "info,session_store=debug,session_api=debug,tower_http=debug",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives_per_env() {
        assert_eq!(default_directives("production"), "info");
        assert!(default_directives("development").contains("session_store=debug"));
        assert!(default_directives("staging").contains("session_api=debug"));
    }

    #[test]
    fn test_default_directives_parse() {
        for env in ["production", "development"] {
            assert!(EnvFilter::try_new(default_directives(env)).is_ok(), "{}", env);
        }
    }
}
