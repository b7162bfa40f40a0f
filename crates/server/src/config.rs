//! Server configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Store
//! - `RECIPES_STORE` - `postgres` (default) or `memory`
//! - `RECIPES_DATABASE_URL` - `PostgreSQL` connection string, falls back to
//!   `DATABASE_URL` (required when the store is `postgres`)
//! - `RECIPES_DB_MAX_CONNECTIONS` - Pool size (default: 10)
//!
//! ## Server
//! - `RECIPES_HOST` - Bind address (default: 127.0.0.1)
//! - `RECIPES_PORT` - Listen port (default: 8000)
//!
//! ## Logging
//! - `RECIPES_LOG_FORMAT` - `text` (default) or `json` for stdout
//! - `APP_LOG_DIR` - If set, also write JSON logs to `<dir>/app.log`
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment tag

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use secrecy::SecretString;
use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Which recipe store backs the server.
///
/// `Debug` never prints the connection string.
#[derive(Clone)]
pub enum StoreConfig {
    /// `PostgreSQL` through a connection pool.
    Postgres {
        /// Connection URL (contains password)
        database_url: SecretString,
        /// Upper bound on pooled connections
        max_connections: u32,
    },
    /// Process-local store; contents are lost on restart.
    Memory,
}

impl std::fmt::Debug for StoreConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Postgres {
                max_connections, ..
            } => f
                .debug_struct("Postgres")
                .field("database_url", &"[REDACTED]")
                .field("max_connections", max_connections)
                .finish(),
            Self::Memory => f.write_str("Memory"),
        }
    }
}

/// Stdout log format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Recipe store backend
    pub store: StoreConfig,
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Stdout log format
    pub log_format: LogFormat,
    /// Directory for the `app.log` file, if file logging is enabled
    pub log_dir: Option<PathBuf>,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment tag
    pub sentry_environment: Option<String>,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let store = match get_or_default(&lookup, "RECIPES_STORE", "postgres").as_str() {
            "postgres" => StoreConfig::Postgres {
                database_url: get_database_url(&lookup, "RECIPES_DATABASE_URL")?,
                max_connections: parse_var(&lookup, "RECIPES_DB_MAX_CONNECTIONS", "10")?,
            },
            "memory" => StoreConfig::Memory,
            other => {
                return Err(ConfigError::InvalidEnvVar(
                    "RECIPES_STORE".to_string(),
                    format!("expected 'postgres' or 'memory', got '{other}'"),
                ));
            }
        };

        let log_format = match get_or_default(&lookup, "RECIPES_LOG_FORMAT", "text").as_str() {
            "text" => LogFormat::Text,
            "json" => LogFormat::Json,
            other => {
                return Err(ConfigError::InvalidEnvVar(
                    "RECIPES_LOG_FORMAT".to_string(),
                    format!("expected 'text' or 'json', got '{other}'"),
                ));
            }
        };

        Ok(Self {
            store,
            host: parse_var(&lookup, "RECIPES_HOST", "127.0.0.1")?,
            port: parse_var(&lookup, "RECIPES_PORT", "8000")?,
            log_format,
            log_dir: lookup("APP_LOG_DIR").map(PathBuf::from),
            sentry_dsn: lookup("SENTRY_DSN"),
            sentry_environment: lookup("SENTRY_ENVIRONMENT"),
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a variable with a default value.
fn get_or_default(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: &str) -> String {
    lookup(key).unwrap_or_else(|| default.to_string())
}

/// Parse a variable (or its default) into `T`.
fn parse_var<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: &str,
) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    get_or_default(lookup, key, default)
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}

/// Get database URL with fallback to generic `DATABASE_URL`.
fn get_database_url(
    lookup: &impl Fn(&str) -> Option<String>,
    primary_key: &str,
) -> Result<SecretString, ConfigError> {
    lookup(primary_key)
        .or_else(|| lookup("DATABASE_URL"))
        .map(SecretString::from)
        .ok_or_else(|| ConfigError::MissingEnvVar(primary_key.to_string()))
}
