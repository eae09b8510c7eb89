/**
 * Server Configuration
 *
 * This module reads the server configuration from environment variables
 * (a `.env` file is loaded by the binary beforehand) and assembles the
 * PostgreSQL connection string when only discrete `PG*` variables are given.
 *
 * # Configuration Sources
 *
 * | Variable               | Meaning                                   | Default                          |
 * |------------------------|-------------------------------------------|----------------------------------|
 * | `PORT`                 | Listen port                               | `5000`                           |
 * | `SECRET_KEY`           | Signing secret                            | `dev-secret`                     |
 * | `APP_ENV` / `RENDER`   | Production when `production` / `true`     | development                      |
 * | `DATABASE_URL`         | Full connection string                    | unset                            |
 * | `PGUSER`, `PGPASSWORD`, `PGDATABASE` | Discrete connection parts   | unset                            |
 * | `PGHOST`, `PGPORT`     | Host and port for the discrete parts      | `localhost`, `5432`              |
 * | `SQLITE_PATH`          | Fallback SQLite file                      | `souvenir_souvenir_ent_100.db`   |
 * | `CORS_ALLOWED_ORIGINS` | Comma-separated origin allow-list         | the two GitHub Pages origins     |
 * | `MAX_MESSAGES`         | Retention cap                             | `100`                            |
 *
 * Empty variables are treated as unset.
 */

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::fmt;
use thiserror::Error;

/// Default listen port
pub const DEFAULT_PORT: u16 = 5000;

/// Secret used when `SECRET_KEY` is not set
pub const DEFAULT_SECRET_KEY: &str = "dev-secret";

/// Fallback SQLite database file
pub const DEFAULT_SQLITE_PATH: &str = "souvenir_souvenir_ent_100.db";

/// Number of messages kept in the store
pub const DEFAULT_MAX_MESSAGES: usize = 100;

/// Origins allowed to call the API, form and debug endpoints cross-origin
pub const DEFAULT_CORS_ORIGINS: [&str; 2] = [
    "https://joel3500.github.io",
    "https://joel3500.github.io/Souvenir_Souvenir_ENT_100",
];

const DEFAULT_PG_HOST: &str = "localhost";
const DEFAULT_PG_PORT: u16 = 5432;

// Unreserved characters (RFC 3986) stay as they are, everything else is escaped.
const USERINFO: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

/// Database connection settings
///
/// Holds whatever was configured; `connection_url` decides whether a
/// networked backend should be attempted at all.
#[derive(Clone, PartialEq, Eq)]
pub struct DatabaseSettings {
    pub database_url: Option<String>,
    pub user: Option<String>,
    pub password: Option<String>,
    pub host: String,
    pub port: u16,
    pub name: Option<String>,
    pub sqlite_path: String,
}

impl DatabaseSettings {
    /// Settings with no networked configuration, storing into `sqlite_path`
    pub fn sqlite(sqlite_path: impl Into<String>) -> Self {
        Self {
            database_url: None,
            user: None,
            password: None,
            host: DEFAULT_PG_HOST.to_string(),
            port: DEFAULT_PG_PORT,
            name: None,
            sqlite_path: sqlite_path.into(),
        }
    }

    /// Read the settings through `lookup`
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.is_empty());

        Ok(Self {
            database_url: get("DATABASE_URL"),
            user: get("PGUSER"),
            password: get("PGPASSWORD"),
            host: get("PGHOST").unwrap_or_else(|| DEFAULT_PG_HOST.to_string()),
            port: parse_or("PGPORT", get("PGPORT"), DEFAULT_PG_PORT)?,
            name: get("PGDATABASE"),
            sqlite_path: get("SQLITE_PATH").unwrap_or_else(|| DEFAULT_SQLITE_PATH.to_string()),
        })
    }

    /// Connection string for the networked backend, if any is configured
    ///
    /// `DATABASE_URL` wins. Otherwise the string is assembled from the
    /// discrete parts, but only when user, password and database name are
    /// all present. User and password are percent-encoded so that reserved
    /// characters (`@`, `:`, `/`, `#`, ...) cannot break the URL.
    pub fn connection_url(&self) -> Option<String> {
        if let Some(url) = &self.database_url {
            return Some(url.clone());
        }

        match (&self.user, &self.password, &self.name) {
            (Some(user), Some(password), Some(name)) => Some(format!(
                "postgresql://{}:{}@{}:{}/{}",
                utf8_percent_encode(user, USERINFO),
                utf8_percent_encode(password, USERINFO),
                self.host,
                self.port,
                name
            )),
            _ => None,
        }
    }
}

impl fmt::Debug for DatabaseSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseSettings")
            .field("database_url", &self.database_url.as_ref().map(|_| "<redacted>"))
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("host", &self.host)
            .field("port", &self.port)
            .field("name", &self.name)
            .field("sqlite_path", &self.sqlite_path)
            .finish()
    }
}

/// Complete server configuration
#[derive(Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub secret_key: String,
    /// Production mode reduces the detail exposed by `/debug/db`
    pub production: bool,
    pub database: DatabaseSettings,
    pub cors_origins: Vec<String>,
    pub max_messages: usize,
}

impl ServerConfig {
    /// Load the configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load the configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.is_empty());

        let production = get("APP_ENV").as_deref() == Some("production")
            || get("RENDER").as_deref() == Some("true");

        let cors_origins = match get("CORS_ALLOWED_ORIGINS") {
            Some(list) => list
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(str::to_string)
                .collect(),
            None => DEFAULT_CORS_ORIGINS.iter().map(|s| s.to_string()).collect(),
        };

        let max_messages = parse_or("MAX_MESSAGES", get("MAX_MESSAGES"), DEFAULT_MAX_MESSAGES)?;
        if max_messages == 0 {
            return Err(ConfigError::InvalidValue {
                key: "MAX_MESSAGES",
                value: "0".to_string(),
            });
        }

        Ok(Self {
            port: parse_or("PORT", get("PORT"), DEFAULT_PORT)?,
            secret_key: get("SECRET_KEY").unwrap_or_else(|| DEFAULT_SECRET_KEY.to_string()),
            production,
            database: DatabaseSettings::from_lookup(&lookup)?,
            cors_origins,
            max_messages,
        })
    }

    /// Development configuration storing into `sqlite_path`
    pub fn development(sqlite_path: impl Into<String>) -> Self {
        Self {
            port: DEFAULT_PORT,
            secret_key: DEFAULT_SECRET_KEY.to_string(),
            production: false,
            database: DatabaseSettings::sqlite(sqlite_path),
            cors_origins: DEFAULT_CORS_ORIGINS.iter().map(|s| s.to_string()).collect(),
            max_messages: DEFAULT_MAX_MESSAGES,
        }
    }

    /// `"production"` or `"development"`
    pub fn environment_name(&self) -> &'static str {
        if self.production {
            "production"
        } else {
            "development"
        }
    }

    pub fn uses_default_secret(&self) -> bool {
        self.secret_key == DEFAULT_SECRET_KEY
    }
}

impl fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerConfig")
            .field("port", &self.port)
            .field("secret_key", &"<redacted>")
            .field("production", &self.production)
            .field("database", &self.database)
            .field("cors_origins", &self.cors_origins)
            .field("max_messages", &self.max_messages)
            .finish()
    }
}

fn parse_or<T: std::str::FromStr>(
    key: &'static str,
    raw: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match raw {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { key, value }),
        None => Ok(default),
    }
}
