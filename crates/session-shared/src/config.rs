//! Configuration management

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::time::Duration;

use crate::constants::{DEFAULT_APP_ENV, DEFAULT_REAP_INTERVAL_SECS, SESSION_COOKIE_NAME};
use crate::error::AppError;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub session: SessionSettings,
    pub seed: SeedSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub env: String,
    pub host: String,
    pub port: u16,
    pub name: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SessionSettings {
    pub cookie_name: String,
    /// Unset means sessions never expire on their own.
    pub idle_timeout_secs: Option<u64>,
    pub reap_interval_secs: u64,
}

impl SessionSettings {
    pub fn idle_timeout(&self) -> Option<Duration> {
        self.idle_timeout_secs.map(Duration::from_secs)
    }

    pub fn reap_interval(&self) -> Duration {
        Duration::from_secs(self.reap_interval_secs.max(1))
    }
}

/// Demo member registered at startup.
#[derive(Debug, Deserialize, Clone)]
pub struct SeedSettings {
    pub enabled: bool,
    pub login_id: String,
    pub password: String,
    pub name: String,
}

impl AppConfig {
    pub fn load() -> Result<Self, AppError> {
        let env = std::env::var("APP_ENV").unwrap_or_else(|_| DEFAULT_APP_ENV.into());
        let config = Self::defaults()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::default().separator("__").try_parsing(true))
            .build()?;
        let cfg: Self = config.try_deserialize()?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        let cookie = &self.session.cookie_name;
        if cookie.is_empty() {
            return Err(AppError::InvalidSetting {
                key: "session.cookie_name",
                reason: "must not be empty".into(),
            });
        }
        // RFC 6265 token: no separators, whitespace or control characters.
        if let Some(c) = cookie
            .chars()
            .find(|c| !c.is_ascii_graphic() || "()<>@,;:\\\"/[]?={}".contains(*c))
        {
            return Err(AppError::InvalidSetting {
                key: "session.cookie_name",
                reason: format!("illegal character {:?}", c),
            });
        }
        if self.session.idle_timeout_secs == Some(0) {
            return Err(AppError::InvalidSetting {
                key: "session.idle_timeout_secs",
                reason: "must be greater than zero; leave unset to disable".into(),
            });
        }
        Ok(())
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("app.env", DEFAULT_APP_ENV)?
            .set_default("app.host", "127.0.0.1")?
            .set_default("app.port", 8080)?
            .set_default("app.name", "session-server")?
            .set_default("session.cookie_name", SESSION_COOKIE_NAME)?
            .set_default("session.reap_interval_secs", DEFAULT_REAP_INTERVAL_SECS)?
            .set_default("seed.enabled", true)?
            .set_default("seed.login_id", "test")?
            .set_default("seed.password", "test!")?
            .set_default("seed.name", "Tester")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    #[test]
    fn test_defaults() {
        let cfg: AppConfig = AppConfig::defaults()
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(cfg.app.port, 8080);
        assert_eq!(cfg.session.cookie_name, "sessionToken");
        assert_eq!(cfg.session.idle_timeout(), None);
        assert_eq!(cfg.session.reap_interval(), Duration::from_secs(60));
        assert!(cfg.seed.enabled);
        assert_eq!(cfg.seed.login_id, "test");
    }

    #[test]
    fn test_file_overrides_defaults() {
        let toml = r#"
            [session]
            cookie_name = "sid"
            idle_timeout_secs = 1800
            reap_interval_secs = 0

            [seed]
            enabled = false
        "#;
        let cfg: AppConfig = AppConfig::defaults()
            .unwrap()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(cfg.session.cookie_name, "sid");
        assert_eq!(cfg.session.idle_timeout(), Some(Duration::from_secs(1800)));
        assert_eq!(cfg.session.reap_interval(), Duration::from_secs(1));
        assert!(!cfg.seed.enabled);
        assert_eq!(cfg.seed.password, "test!");
        assert!(cfg.validate().is_ok());
    }

    fn with_session(toml: &str) -> AppConfig {
        AppConfig::defaults()
            .unwrap()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn test_validate_rejects_bad_cookie_name() {
        let cfg = with_session("[session]\ncookie_name = \"\"");
        assert!(matches!(
            cfg.validate(),
            Err(AppError::InvalidSetting { key: "session.cookie_name", .. })
        ));

        let cfg = with_session("[session]\ncookie_name = \"my session\"");
        assert!(cfg.validate().is_err());

        let cfg = with_session("[session]\ncookie_name = \"sid;x\"");
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_idle_timeout() {
        let cfg = with_session("[session]\nidle_timeout_secs = 0");
        assert!(matches!(
            cfg.validate(),
            Err(AppError::InvalidSetting { key: "session.idle_timeout_secs", .. })
        ));
    }
}
