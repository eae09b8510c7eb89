/**
 * Diagnostic Reports
 *
 * Plain data describing the state of the selected backend. Serialized as-is
 * by the HTTP handlers.
 */

use serde::Serialize;

use crate::backend::chat::db::count_messages;
use crate::backend::server::config::ServerConfig;
use crate::backend::server::database::{BackendKind, Database};

/// Body of a successful `/api/health`
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct HealthReport {
    pub ok: bool,
    pub rows: i64,
}

/// Body of a successful `/debug/db`
///
/// `database` and `host` are `None` in production and are then left out of
/// the JSON entirely; in development `host` is serialized as `null` for SQLite.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DebugReport {
    pub ok: bool,
    pub env: &'static str,
    pub backend: BackendKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<Option<String>>,
    pub version: String,
    pub rows: i64,
}

/// Ping the store and count the messages
pub async fn health_report(db: &Database) -> Result<HealthReport, sqlx::Error> {
    db.ping().await?;
    let rows = count_messages(db).await?;
    Ok(HealthReport { ok: true, rows })
}

impl DebugReport {
    /// Collect version and row count, with identity details outside production
    pub async fn collect(db: &Database, config: &ServerConfig) -> Result<Self, sqlx::Error> {
        let version = db.server_version().await?;
        let rows = count_messages(db).await?;

        let (database, host) = if config.production {
            (None, None)
        } else {
            (
                db.database_name().map(str::to_string),
                Some(db.host().map(str::to_string)),
            )
        };

        Ok(Self {
            ok: true,
            env: config.environment_name(),
            backend: db.kind(),
            database,
            host,
            version,
            rows,
        })
    }
}
