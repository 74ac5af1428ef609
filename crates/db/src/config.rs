//! Database connection and pool settings.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};

/// Connection descriptor plus pool sizing and timeouts.
///
/// Either `url` is set (from `DATABASE_URL`) and wins, or the discrete
/// host/port/database/user/password fields are used.
#[derive(Clone)]
pub struct DbConfig {
    pub url: Option<String>,
    pub host: String,
    pub port: u16,
    pub database: String,
    pub user: String,
    pub password: Option<String>,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout_secs: u64,
    pub idle_timeout_secs: u64,
    /// Server-side `statement_timeout` applied to every pooled connection.
    pub statement_timeout_ms: u64,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            url: None,
            host: "localhost".into(),
            port: 5432,
            database: "postgres".into(),
            user: "postgres".into(),
            password: None,
            max_connections: 10,
            min_connections: 0,
            acquire_timeout_secs: 5,
            idle_timeout_secs: 600,
            statement_timeout_ms: 10_000,
        }
    }
}

impl DbConfig {
    /// Load database configuration from environment variables.
    ///
    /// | Env Var                   | Default     |
    /// |---------------------------|-------------|
    /// | `DATABASE_URL`            | unset       |
    /// | `DB_HOST`                 | `localhost` |
    /// | `DB_PORT`                 | `5432`      |
    /// | `DB_NAME`                 | `postgres`  |
    /// | `DB_USER`                 | `postgres`  |
    /// | `DB_PASSWORD`             | unset       |
    /// | `DB_MAX_CONNECTIONS`      | `10`        |
    /// | `DB_MIN_CONNECTIONS`      | `0`         |
    /// | `DB_ACQUIRE_TIMEOUT_SECS` | `5`         |
    /// | `DB_IDLE_TIMEOUT_SECS`    | `600`       |
    /// | `DB_STATEMENT_TIMEOUT_MS` | `10000`     |
    ///
    /// # Panics
    ///
    /// Panics if a numeric variable is set but does not parse.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        Self {
            url: get("DATABASE_URL"),
            host: get("DB_HOST").unwrap_or(defaults.host),
            port: parse_or(get("DB_PORT"), "DB_PORT", defaults.port),
            database: get("DB_NAME").unwrap_or(defaults.database),
            user: get("DB_USER").unwrap_or(defaults.user),
            password: get("DB_PASSWORD"),
            max_connections: parse_or(
                get("DB_MAX_CONNECTIONS"),
                "DB_MAX_CONNECTIONS",
                defaults.max_connections,
            ),
            min_connections: parse_or(
                get("DB_MIN_CONNECTIONS"),
                "DB_MIN_CONNECTIONS",
                defaults.min_connections,
            ),
            acquire_timeout_secs: parse_or(
                get("DB_ACQUIRE_TIMEOUT_SECS"),
                "DB_ACQUIRE_TIMEOUT_SECS",
                defaults.acquire_timeout_secs,
            ),
            idle_timeout_secs: parse_or(
                get("DB_IDLE_TIMEOUT_SECS"),
                "DB_IDLE_TIMEOUT_SECS",
                defaults.idle_timeout_secs,
            ),
            statement_timeout_ms: parse_or(
                get("DB_STATEMENT_TIMEOUT_MS"),
                "DB_STATEMENT_TIMEOUT_MS",
                defaults.statement_timeout_ms,
            ),
        }
    }

    /// Connection options for every pooled connection.
    ///
    /// Fails only when `url` is set and cannot be parsed.
    pub fn connect_options(&self) -> Result<PgConnectOptions, sqlx::Error> {
        let base = match &self.url {
            Some(url) => PgConnectOptions::from_str(url)?,
            None => {
                let opts = PgConnectOptions::new()
                    .host(&self.host)
                    .port(self.port)
                    .database(&self.database)
                    .username(&self.user);
                match &self.password {
                    Some(password) => opts.password(password),
                    None => opts,
                }
            }
        };

        Ok(self.with_session_options(base))
    }

    /// Apply the per-connection session settings to an existing descriptor.
    pub fn with_session_options(&self, base: PgConnectOptions) -> PgConnectOptions {
        let statement_timeout = self.statement_timeout_ms.to_string();
        base.application_name("realmkeep")
            .options([("statement_timeout", statement_timeout)])
    }

    /// Pool sizing and acquisition limits.
    pub fn pool_options(&self) -> PgPoolOptions {
        PgPoolOptions::new()
            .max_connections(self.max_connections)
            .min_connections(self.min_connections)
            .acquire_timeout(self.acquire_timeout())
            .idle_timeout(self.idle_timeout())
    }

    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_secs)
    }

    pub fn idle_timeout(&self) -> Duration {
        Duration::from_secs(self.idle_timeout_secs)
    }
}

// Credentials must never reach logs.
impl fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbConfig")
            .field("url", &self.url.as_ref().map(|_| "<redacted>"))
            .field("host", &self.host)
            .field("port", &self.port)
            .field("database", &self.database)
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("max_connections", &self.max_connections)
            .field("min_connections", &self.min_connections)
            .field("acquire_timeout_secs", &self.acquire_timeout_secs)
            .field("idle_timeout_secs", &self.idle_timeout_secs)
            .field("statement_timeout_ms", &self.statement_timeout_ms)
            .finish()
    }
}

fn parse_or<T: FromStr>(value: Option<String>, key: &str, default: T) -> T {
    match value {
        Some(raw) => raw
            .trim()
            .parse()
            .unwrap_or_else(|_| panic!("{key} must be a valid number")),
        None => default,
    }
}
