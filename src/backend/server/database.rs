/**
 * Persistence Backend Selection
 *
 * This module owns the `Database` handle: which engine is in use, its pool,
 * and the identity details reported by the diagnostics endpoint.
 *
 * # Selection Order
 *
 * 1. A connection string from `DatabaseSettings::connection_url`
 *    (`DATABASE_URL`, or one assembled from the `PG*` variables).
 * 2. If that string is missing, unsupported or unreachable, the local
 *    SQLite file from `SQLITE_PATH`.
 *
 * A networked backend that cannot be reached is never fatal; only failing
 * to open the SQLite fallback stops the server.
 */

use serde::Serialize;
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;

use crate::backend::server::config::DatabaseSettings;

const POOL_MAX_CONNECTIONS: u32 = 5;
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

const POSTGRES_SCHEMA: [&str; 2] = [
    r#"
    CREATE TABLE IF NOT EXISTS chatmessage (
        id BIGSERIAL PRIMARY KEY,
        prenom VARCHAR(50) NOT NULL,
        filiaire VARCHAR(120) NOT NULL,
        commentaire TEXT NOT NULL,
        created_at TIMESTAMP NOT NULL
    )
    "#,
    "CREATE INDEX IF NOT EXISTS chatmessage_created_at ON chatmessage (created_at)",
];

const SQLITE_SCHEMA: [&str; 2] = [
    r#"
    CREATE TABLE IF NOT EXISTS chatmessage (
        id INTEGER NOT NULL PRIMARY KEY AUTOINCREMENT,
        prenom VARCHAR(50) NOT NULL,
        filiaire VARCHAR(120) NOT NULL,
        commentaire TEXT NOT NULL,
        created_at DATETIME NOT NULL
    )
    "#,
    "CREATE INDEX IF NOT EXISTS chatmessage_created_at ON chatmessage (created_at)",
];

/// Storage engine behind a `Database`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    Postgresql,
    Sqlite,
}

impl BackendKind {
    /// Engine implied by a connection string's scheme
    pub fn from_url(url: &str) -> Option<Self> {
        if url.starts_with("postgres://") || url.starts_with("postgresql://") {
            Some(Self::Postgresql)
        } else if url.starts_with("sqlite:") {
            Some(Self::Sqlite)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Postgresql => "postgresql",
            Self::Sqlite => "sqlite",
        }
    }
}

/// The persistence handle chosen at startup
///
/// Cloning is cheap: both variants wrap a reference-counted pool.
#[derive(Debug, Clone)]
pub enum Database {
    Postgres {
        pool: PgPool,
        name: Option<String>,
        host: String,
    },
    Sqlite {
        pool: SqlitePool,
        path: String,
    },
}

impl Database {
    /// Run the selection algorithm and make sure the schema exists
    ///
    /// # Errors
    ///
    /// Only when the SQLite fallback itself cannot be opened.
    pub async fn prepare(settings: &DatabaseSettings) -> Result<Self, sqlx::Error> {
        let database = Self::select(settings).await?;

        if let Err(e) = database.ensure_schema().await {
            // Not fatal: queries report the problem per request.
            tracing::error!("[DB] init schema failed: {}", e);
        } else {
            tracing::info!("[DB] schema OK (tables created if necessary)");
        }

        database.log_backend();
        Ok(database)
    }

    /// Pick the backend without touching the schema
    pub async fn select(settings: &DatabaseSettings) -> Result<Self, sqlx::Error> {
        if let Some(url) = settings.connection_url() {
            match Self::connect_url(&url).await {
                Ok(database) => return Ok(database),
                Err(e) => {
                    tracing::warn!(
                        "[DB] Networked database unavailable, falling back to SQLite: {}",
                        e
                    );
                }
            }
        }

        Self::open_sqlite(&settings.sqlite_path).await
    }

    /// Connect to whatever engine `url` designates
    pub async fn connect_url(url: &str) -> Result<Self, sqlx::Error> {
        match BackendKind::from_url(url) {
            Some(BackendKind::Postgresql) => Self::connect_postgres(url).await,
            Some(BackendKind::Sqlite) => Self::open_sqlite(url).await,
            None => Err(sqlx::Error::Configuration(
                "unsupported database URL scheme".into(),
            )),
        }
    }

    /// Connect to PostgreSQL
    pub async fn connect_postgres(url: &str) -> Result<Self, sqlx::Error> {
        let options = PgConnectOptions::from_str(url)?;
        let name = options.get_database().map(str::to_string);
        let host = options.get_host().to_string();

        tracing::info!("[DB] Connecting to PostgreSQL at {}...", host);

        let pool = PgPoolOptions::new()
            .max_connections(POOL_MAX_CONNECTIONS)
            .acquire_timeout(ACQUIRE_TIMEOUT)
            .connect_with(options)
            .await?;

        Ok(Self::Postgres { pool, name, host })
    }

    /// Open (creating if needed) a SQLite database
    ///
    /// Accepts either a plain file path or a `sqlite:` URL.
    pub async fn open_sqlite(location: &str) -> Result<Self, sqlx::Error> {
        let options = if location.starts_with("sqlite:") {
            SqliteConnectOptions::from_str(location)?
        } else {
            SqliteConnectOptions::new().filename(location)
        }
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(ACQUIRE_TIMEOUT);

        let path = options.get_filename().display().to_string();

        let pool = SqlitePoolOptions::new()
            .max_connections(POOL_MAX_CONNECTIONS)
            .acquire_timeout(ACQUIRE_TIMEOUT)
            .connect_with(options)
            .await?;

        Ok(Self::Sqlite { pool, path })
    }

    /// Create the message table and its index when they are missing
    pub async fn ensure_schema(&self) -> Result<(), sqlx::Error> {
        match self {
            Self::Postgres { pool, .. } => {
                for statement in POSTGRES_SCHEMA {
                    sqlx::query(statement).execute(pool).await?;
                }
            }
            Self::Sqlite { pool, .. } => {
                for statement in SQLITE_SCHEMA {
                    sqlx::query(statement).execute(pool).await?;
                }
            }
        }
        Ok(())
    }

    pub fn kind(&self) -> BackendKind {
        match self {
            Self::Postgres { .. } => BackendKind::Postgresql,
            Self::Sqlite { .. } => BackendKind::Sqlite,
        }
    }

    /// Database name (PostgreSQL) or file path (SQLite)
    pub fn database_name(&self) -> Option<&str> {
        match self {
            Self::Postgres { name, .. } => name.as_deref(),
            Self::Sqlite { path, .. } => Some(path.as_str()),
        }
    }

    /// Server host; SQLite has none
    pub fn host(&self) -> Option<&str> {
        match self {
            Self::Postgres { host, .. } => Some(host.as_str()),
            Self::Sqlite { .. } => None,
        }
    }

    /// Trivial round trip to the store
    pub async fn ping(&self) -> Result<(), sqlx::Error> {
        match self {
            Self::Postgres { pool, .. } => {
                sqlx::query_scalar::<_, i32>("SELECT 1").fetch_one(pool).await?;
            }
            Self::Sqlite { pool, .. } => {
                sqlx::query_scalar::<_, i32>("SELECT 1").fetch_one(pool).await?;
            }
        }
        Ok(())
    }

    /// Engine version string
    pub async fn server_version(&self) -> Result<String, sqlx::Error> {
        match self {
            Self::Postgres { pool, .. } => {
                sqlx::query_scalar("SELECT version()").fetch_one(pool).await
            }
            Self::Sqlite { pool, .. } => {
                sqlx::query_scalar("SELECT sqlite_version()")
                    .fetch_one(pool)
                    .await
            }
        }
    }

    /// Close the pool; every later query fails
    pub async fn close(&self) {
        match self {
            Self::Postgres { pool, .. } => pool.close().await,
            Self::Sqlite { pool, .. } => pool.close().await,
        }
    }

    fn log_backend(&self) {
        match self {
            Self::Postgres { name, host, .. } => tracing::info!(
                "[DB] Backend = PostgreSQL (database: {}, host: {})",
                name.as_deref().unwrap_or("<default>"),
                host
            ),
            Self::Sqlite { path, .. } => {
                tracing::info!("[DB] Backend = SQLite (file: {})", path)
            }
        }
    }
}
