//! Process configuration read from the environment at startup.
//!
//! DESIGN
//! ======
//! Everything is resolved once into an immutable `Config` that lives in
//! `AppState`. Parsing goes through a lookup closure so tests can feed a map
//! instead of mutating the process environment.

use std::time::Duration;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_IDLE_THRESHOLD_SECS: i64 = 120;
const DEFAULT_THROTTLE_LIMIT: usize = 5;
const DEFAULT_THROTTLE_WINDOW_SECS: u64 = 300;
const DEFAULT_GLOBAL_THROTTLE_LIMIT: usize = 100;
const DEFAULT_GLOBAL_THROTTLE_WINDOW_SECS: u64 = 60;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("DATABASE_URL required")]
    MissingDatabaseUrl,
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
}

/// Sliding-window limits for login attempts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThrottleConfig {
    /// Failed attempts allowed per username inside `window`.
    pub per_user_limit: usize,
    pub per_user_window: Duration,
    /// Attempts of any kind allowed across all usernames inside `global_window`.
    pub global_limit: usize,
    pub global_window: Duration,
}

impl Default for ThrottleConfig {
    fn default() -> Self {
        Self {
            per_user_limit: DEFAULT_THROTTLE_LIMIT,
            per_user_window: Duration::from_secs(DEFAULT_THROTTLE_WINDOW_SECS),
            global_limit: DEFAULT_GLOBAL_THROTTLE_LIMIT,
            global_window: Duration::from_secs(DEFAULT_GLOBAL_THROTTLE_WINDOW_SECS),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub db_max_connections: u32,
    /// Shared secret for admin sign-up. `None` disables admin registration.
    pub admin_registration_key: Option<String>,
    /// Seconds since the last heartbeat after which a student shows as idle.
    pub idle_threshold_secs: i64,
    pub cookie_secure: bool,
    pub throttle: ThrottleConfig,
}

impl Config {
    /// Read configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `DATABASE_URL` is missing or `PORT` does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .ok_or(ConfigError::MissingDatabaseUrl)?;

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let admin_registration_key = lookup("ADMIN_REGISTRATION_KEY").filter(|key| !key.is_empty());
        if admin_registration_key.is_none() {
            tracing::warn!("ADMIN_REGISTRATION_KEY not set; admin registration disabled");
        }

        let throttle = ThrottleConfig {
            per_user_limit: parse_or(&lookup, "LOGIN_THROTTLE_LIMIT", DEFAULT_THROTTLE_LIMIT),
            per_user_window: Duration::from_secs(parse_or(
                &lookup,
                "LOGIN_THROTTLE_WINDOW_SECS",
                DEFAULT_THROTTLE_WINDOW_SECS,
            )),
            ..ThrottleConfig::default()
        };

        Ok(Self {
            database_url,
            port,
            db_max_connections: parse_or(&lookup, "DB_MAX_CONNECTIONS", DEFAULT_DB_MAX_CONNECTIONS),
            admin_registration_key,
            idle_threshold_secs: parse_or(&lookup, "IDLE_THRESHOLD_SECS", DEFAULT_IDLE_THRESHOLD_SECS),
            cookie_secure: lookup("COOKIE_SECURE")
                .as_deref()
                .and_then(parse_bool)
                .unwrap_or(false),
            throttle,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    lookup(key)
        .and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}

pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
