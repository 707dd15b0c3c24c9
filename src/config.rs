//! Client configuration resolved at build time.
//!
//! SYSTEM CONTEXT
//! ==============
//! A static SPA has no process environment at runtime, so the only knobs are
//! baked in by the build (`GROCERY_API_BASE_URL`, `GROCERY_LOG_LEVEL`).
//! Everything else is a fixed constant shared by storage and theme helpers.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// REST API root used when the build does not override it.
pub const DEFAULT_API_BASE_URL: &str = "https://grocery.micdrew.house/api";

/// Storage key holding the remembered username.
pub const USERNAME_STORAGE_KEY: &str = "grocery-app-username";

/// Storage key holding the selected theme (`light`, `dark`, `system`).
pub const THEME_STORAGE_KEY: &str = "theme";

/// Pre-theme preference key (`"true"`/`"false"`), read when `theme` is absent.
pub const LEGACY_DARK_MODE_KEY: &str = "darkMode";

/// Lifetime of cookies written by the storage fallback.
pub const COOKIE_RETENTION_DAYS: i64 = 30;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown log level: {0}")]
    LogLevel(String),
}

/// Typed client configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub log_level: log::Level,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { api_base_url: DEFAULT_API_BASE_URL.to_owned(), log_level: log::Level::Info }
    }
}

impl ClientConfig {
    /// Build config from variables captured at compile time.
    ///
    /// An unparseable log level falls back to `info` with a warning so a bad
    /// build flag never prevents the app from mounting.
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("GROCERY_API_BASE_URL"), option_env!("GROCERY_LOG_LEVEL"))
    }

    pub fn from_values(base_url: Option<&str>, log_level: Option<&str>) -> Self {
        let api_base_url = normalize_base_url(base_url.unwrap_or(DEFAULT_API_BASE_URL));
        let log_level = match log_level.map(parse_log_level).transpose() {
            Ok(level) => level.unwrap_or(log::Level::Info),
            Err(e) => {
                log::warn!("{e}; using info");
                log::Level::Info
            }
        };
        Self { api_base_url, log_level }
    }
}

fn normalize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() { DEFAULT_API_BASE_URL.to_owned() } else { trimmed.to_owned() }
}

fn parse_log_level(raw: &str) -> Result<log::Level, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "error" => Ok(log::Level::Error),
        "warn" | "warning" => Ok(log::Level::Warn),
        "info" => Ok(log::Level::Info),
        "debug" => Ok(log::Level::Debug),
        "trace" => Ok(log::Level::Trace),
        other => Err(ConfigError::LogLevel(other.to_owned())),
    }
}
