//! Database configuration read from the environment
//!
//! Environment variables (all optional):
//!   DB_HOST                 # default: localhost
//!   DB_USER                 # default: postgres
//!   DB_PASSWORD             # default: postgres
//!   DB_NAME                 # default: postgres
//!   DB_POOL_MAX             # default: 10
//!   DB_IDLE_TIMEOUT_MS      # default: 30000
//!   DB_ACQUIRE_TIMEOUT_MS   # default: 5000
//!
//! The port is fixed at 5432.

use std::fmt;
use std::time::Duration;

use sqlx::postgres::PgConnectOptions;

use crate::error::ConfigError;

pub const DB_PORT: u16 = 5432;

const DEFAULT_HOST: &str = "localhost";
const DEFAULT_USER: &str = "postgres";
const DEFAULT_PASSWORD: &str = "postgres";
const DEFAULT_DATABASE: &str = "postgres";
const DEFAULT_MAX_CONNECTIONS: u32 = 10;
const DEFAULT_IDLE_TIMEOUT_MS: u64 = 30_000;
const DEFAULT_ACQUIRE_TIMEOUT_MS: u64 = 5_000;

/// Connection and pool settings, immutable once loaded
#[derive(Clone, PartialEq, Eq)]
pub struct DbConfig {
    pub host: String,
    pub user: String,
    pub password: String,
    pub database: String,
    pub port: u16,
    pub max_connections: u32,
    /// Connections idle longer than this are closed
    pub idle_timeout: Duration,
    /// How long a caller waits for a free connection before failing
    pub acquire_timeout: Duration,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            user: DEFAULT_USER.to_string(),
            password: DEFAULT_PASSWORD.to_string(),
            database: DEFAULT_DATABASE.to_string(),
            port: DB_PORT,
            max_connections: DEFAULT_MAX_CONNECTIONS,
            idle_timeout: Duration::from_millis(DEFAULT_IDLE_TIMEOUT_MS),
            acquire_timeout: Duration::from_millis(DEFAULT_ACQUIRE_TIMEOUT_MS),
        }
    }
}

impl DbConfig {
    /// Load from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary variable lookup.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let max_connections = match get("DB_POOL_MAX") {
            Some(raw) => parse_positive("DB_POOL_MAX", &raw)?,
            None => defaults.max_connections,
        };
        let idle_timeout = match get("DB_IDLE_TIMEOUT_MS") {
            Some(raw) => Duration::from_millis(parse_positive("DB_IDLE_TIMEOUT_MS", &raw)?),
            None => defaults.idle_timeout,
        };
        let acquire_timeout = match get("DB_ACQUIRE_TIMEOUT_MS") {
            Some(raw) => Duration::from_millis(parse_positive("DB_ACQUIRE_TIMEOUT_MS", &raw)?),
            None => defaults.acquire_timeout,
        };

        Ok(Self {
            host: get("DB_HOST").unwrap_or(defaults.host),
            user: get("DB_USER").unwrap_or(defaults.user),
            password: get("DB_PASSWORD").unwrap_or(defaults.password),
            database: get("DB_NAME").unwrap_or(defaults.database),
            port: DB_PORT,
            max_connections,
            idle_timeout,
            acquire_timeout,
        })
    }

    /// Connection options for sqlx
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.database)
    }
}

fn parse_positive<T>(var: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr + PartialOrd + Default,
{
    match raw.trim().parse::<T>() {
        Ok(n) if n > T::default() => Ok(n),
        _ => Err(ConfigError::InvalidNumber {
            var,
            value: raw.to_string(),
        }),
    }
}

// Keep the password out of logs
impl fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbConfig")
            .field("host", &self.host)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("database", &self.database)
            .field("port", &self.port)
            .field("max_connections", &self.max_connections)
            .field("idle_timeout", &self.idle_timeout)
            .field("acquire_timeout", &self.acquire_timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = DbConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.host, "localhost");
        assert_eq!(config.user, "postgres");
        assert_eq!(config.password, "postgres");
        assert_eq!(config.database, "postgres");
        assert_eq!(config.port, 5432);
        assert_eq!(config.max_connections, 10);
        assert_eq!(config.idle_timeout, Duration::from_millis(30_000));
        assert_eq!(config.acquire_timeout, Duration::from_millis(5_000));
    }

    #[test]
    fn overrides_from_environment() {
        let config = DbConfig::from_lookup(lookup(&[
            ("DB_HOST", "db.internal"),
            ("DB_USER", "probe"),
            ("DB_PASSWORD", "hunter2"),
            ("DB_NAME", "platform"),
            ("DB_POOL_MAX", "3"),
            ("DB_ACQUIRE_TIMEOUT_MS", "250"),
        ]))
        .unwrap();

        assert_eq!(config.host, "db.internal");
        assert_eq!(config.user, "probe");
        assert_eq!(config.password, "hunter2");
        assert_eq!(config.database, "platform");
        assert_eq!(config.max_connections, 3);
        assert_eq!(config.acquire_timeout, Duration::from_millis(250));
        assert_eq!(config.idle_timeout, Duration::from_millis(30_000));
    }

    #[test]
    fn empty_values_fall_back_to_defaults() {
        let config = DbConfig::from_lookup(lookup(&[("DB_HOST", ""), ("DB_POOL_MAX", " ")])).unwrap();
        assert_eq!(config.host, "localhost");
        assert_eq!(config.max_connections, 10);
    }

    #[test]
    fn rejects_invalid_numbers() {
        let err = DbConfig::from_lookup(lookup(&[("DB_POOL_MAX", "lots")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidNumber {
                var: "DB_POOL_MAX",
                value: "lots".into()
            }
        );

        let err = DbConfig::from_lookup(lookup(&[("DB_IDLE_TIMEOUT_MS", "0")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidNumber { var: "DB_IDLE_TIMEOUT_MS", .. }));
    }

    #[test]
    fn debug_redacts_password() {
        let config = DbConfig::from_lookup(lookup(&[("DB_PASSWORD", "hunter2")])).unwrap();
        let printed = format!("{:?}", config);
        assert!(!printed.contains("hunter2"));
        assert!(printed.contains("<redacted>"));
    }
}
