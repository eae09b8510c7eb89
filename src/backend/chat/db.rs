/**
 * Database Operations for Chat Messages
 *
 * This module provides the queries behind the guestbook: insert, listing,
 * counting and the retention trim. Every function works against either
 * backend; the SQL differs only where the dialects do.
 *
 * Timestamps are stored as naive UTC (`TIMESTAMP` / `DATETIME`) and turned
 * back into `DateTime<Utc>` when read.
 */

use chrono::{NaiveDateTime, Utc};

use crate::backend::server::database::Database;
use crate::shared::{ChatMessage, Submission};

/// Row as read from `chatmessage`
#[derive(Debug, sqlx::FromRow)]
struct MessageRow {
    id: i64,
    prenom: String,
    filiaire: String,
    commentaire: String,
    created_at: NaiveDateTime,
}

impl From<MessageRow> for ChatMessage {
    fn from(row: MessageRow) -> Self {
        Self {
            id: row.id,
            prenom: row.prenom,
            filiaire: row.filiaire,
            commentaire: row.commentaire,
            created_at: row.created_at.and_utc(),
        }
    }
}

/// Store a validated submission
///
/// # Returns
/// The stored message, with its id and creation time
pub async fn insert_message(
    db: &Database,
    submission: &Submission,
) -> Result<ChatMessage, sqlx::Error> {
    let created_at = Utc::now().naive_utc();

    let row: MessageRow = match db {
        Database::Postgres { pool, .. } => {
            // id cast keeps tables created with a plain SERIAL readable
            sqlx::query_as(
                r#"
                INSERT INTO chatmessage (prenom, filiaire, commentaire, created_at)
                VALUES ($1, $2, $3, $4)
                RETURNING id::BIGINT AS id, prenom, filiaire, commentaire, created_at
                "#,
            )
            .bind(submission.prenom())
            .bind(submission.filiaire())
            .bind(submission.commentaire())
            .bind(created_at)
            .fetch_one(pool)
            .await?
        }
        Database::Sqlite { pool, .. } => {
            sqlx::query_as(
                r#"
                INSERT INTO chatmessage (prenom, filiaire, commentaire, created_at)
                VALUES (?, ?, ?, ?)
                RETURNING id, prenom, filiaire, commentaire, created_at
                "#,
            )
            .bind(submission.prenom())
            .bind(submission.filiaire())
            .bind(submission.commentaire())
            .bind(created_at)
            .fetch_one(pool)
            .await?
        }
    };

    Ok(row.into())
}

/// All stored messages, newest first
pub async fn list_messages(db: &Database) -> Result<Vec<ChatMessage>, sqlx::Error> {
    let rows: Vec<MessageRow> = match db {
        Database::Postgres { pool, .. } => {
            sqlx::query_as(
                r#"
                SELECT id::BIGINT AS id, prenom, filiaire, commentaire, created_at
                FROM chatmessage
                ORDER BY created_at DESC, id DESC
                "#,
            )
            .fetch_all(pool)
            .await?
        }
        Database::Sqlite { pool, .. } => {
            sqlx::query_as(
                r#"
                SELECT id, prenom, filiaire, commentaire, created_at
                FROM chatmessage
                ORDER BY created_at DESC, id DESC
                "#,
            )
            .fetch_all(pool)
            .await?
        }
    };

    Ok(rows.into_iter().map(ChatMessage::from).collect())
}

/// Number of stored messages
pub async fn count_messages(db: &Database) -> Result<i64, sqlx::Error> {
    match db {
        Database::Postgres { pool, .. } => {
            sqlx::query_scalar("SELECT COUNT(*) FROM chatmessage")
                .fetch_one(pool)
                .await
        }
        Database::Sqlite { pool, .. } => {
            sqlx::query_scalar("SELECT COUNT(*) FROM chatmessage")
                .fetch_one(pool)
                .await
        }
    }
}

/// Delete everything but the `max_rows` most recent messages
///
/// A single statement, so two concurrent trims can never remove more than
/// the excess: whatever runs last still keeps the newest `max_rows`.
///
/// # Returns
/// Number of rows deleted (0 when already within the cap)
pub async fn enforce_cap(db: &Database, max_rows: usize) -> Result<u64, sqlx::Error> {
    let limit = i64::try_from(max_rows).unwrap_or(i64::MAX);

    let deleted = match db {
        Database::Postgres { pool, .. } => {
            sqlx::query(
                r#"
                DELETE FROM chatmessage
                WHERE id NOT IN (
                    SELECT id FROM chatmessage
                    ORDER BY created_at DESC, id DESC
                    LIMIT $1
                )
                "#,
            )
            .bind(limit)
            .execute(pool)
            .await?
            .rows_affected()
        }
        Database::Sqlite { pool, .. } => {
            sqlx::query(
                r#"
                DELETE FROM chatmessage
                WHERE id NOT IN (
                    SELECT id FROM chatmessage
                    ORDER BY created_at DESC, id DESC
                    LIMIT ?
                )
                "#,
            )
            .bind(limit)
            .execute(pool)
            .await?
            .rows_affected()
        }
    };

    if deleted > 0 {
        tracing::info!("[DB] Retention trimmed {} old messages (cap {})", deleted, max_rows);
    }

    Ok(deleted)
}
