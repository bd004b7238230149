//! Centralized configuration (environment variables + defaults).
//!
//! Values are read once into a [`Config`] snapshot which is handed to the
//! components that need it.

use anyhow::Context;
use sqlx::postgres::{PgConnectOptions, PgSslMode};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_DB_HOST: &str = "localhost";
pub const DEFAULT_DB_PORT: u16 = 5432;
pub const DEFAULT_DB_USER: &str = "postgres";
pub const DEFAULT_DB_PASSWORD: &str = "postgres";
pub const DEFAULT_DB_NAME: &str = "music_api";
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_SERVER_PORT: u16 = 8080;
pub const DEFAULT_EXTERNAL_API_URL: &str = "http://localhost:8081";
pub const DEFAULT_EXTERNAL_API_TIMEOUT_SECS: u64 = 10;

/// Connection settings for the Postgres database holding the `songs` table.
#[derive(Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
    /// Full connection URL; takes precedence over the individual fields.
    pub url_override: Option<String>,
    pub max_connections: u32,
}

impl DatabaseConfig {
    /// Connection options used by the pool.
    ///
    /// Credentials are passed as discrete options, so reserved URL characters
    /// in the user or password need no escaping.
    pub fn connect_options(&self) -> Result<PgConnectOptions, sqlx::Error> {
        if let Some(url) = &self.url_override {
            return PgConnectOptions::from_str(url);
        }
        Ok(PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.name)
            .ssl_mode(PgSslMode::Disable))
    }
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("name", &self.name)
            .field("url_override", &self.url_override.as_ref().map(|_| "<set>"))
            .field("max_connections", &self.max_connections)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server_port: u16,
    /// Base URL of the song info service (`{base}/info?group=&song=`).
    pub external_api_url: String,
    pub external_api_timeout: Duration,
}

impl Config {
    /// Loads `.env` (if any) and reads the configuration from the environment.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let string = |key: &str, default: &str| -> String {
            lookup(key)
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let database = DatabaseConfig {
            host: string("DB_HOST", DEFAULT_DB_HOST),
            port: parse_or(&lookup, "DB_PORT", DEFAULT_DB_PORT)?,
            user: string("DB_USER", DEFAULT_DB_USER),
            password: string("DB_PASSWORD", DEFAULT_DB_PASSWORD),
            name: string("DB_NAME", DEFAULT_DB_NAME),
            url_override: lookup("DATABASE_URL").filter(|v| !v.is_empty()),
            max_connections: parse_or(&lookup, "DB_MAX_CONNECTIONS", DEFAULT_DB_MAX_CONNECTIONS)?
                .max(1),
        };

        let timeout_secs: u64 = parse_or(
            &lookup,
            "EXTERNAL_API_TIMEOUT_SECS",
            DEFAULT_EXTERNAL_API_TIMEOUT_SECS,
        )?;

        Ok(Self {
            database,
            server_port: parse_or(&lookup, "SERVER_PORT", DEFAULT_SERVER_PORT)?,
            external_api_url: string("EXTERNAL_API_URL", DEFAULT_EXTERNAL_API_URL),
            external_api_timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// Address the HTTP server binds to.
    pub fn listen_addr(&self) -> String {
        format!("0.0.0.0:{}", self.server_port)
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> anyhow::Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key).filter(|v| !v.trim().is_empty()) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{} must be a valid number, got {:?}", key, raw)),
        None => Ok(default),
    }
}
