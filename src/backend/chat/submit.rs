/**
 * Submission Pipeline
 *
 * The single write path shared by `POST /api/chat` and `POST /post`:
 *
 * 1. Trim and check the three fields (`RawSubmission::validate`)
 * 2. Insert the row
 * 3. Trim the table back to the retention cap
 * 4. Publish `chat:new` to live viewers
 *
 * A validation failure stops at step 1 and nothing is written. A database
 * failure at step 2 or 3 is returned to the caller and nothing is
 * published. Publishing itself cannot fail.
 */

use crate::backend::chat::db::{enforce_cap, insert_message};
use crate::backend::error::BackendError;
use crate::backend::realtime::broadcast::broadcast_event;
use crate::backend::server::state::AppState;
use crate::shared::{ChatMessage, RawSubmission, RealtimeEvent};

/// Validate, store, trim and publish one submission
///
/// # Errors
///
/// * `BackendError::Shared(MissingFields)` - a field is absent or blank
/// * `BackendError::Database` - the insert or the trim failed
pub async fn record_submission(
    app_state: &AppState,
    raw: &RawSubmission,
) -> Result<ChatMessage, BackendError> {
    let submission = raw.validate()?;

    let message = insert_message(&app_state.db, &submission)
        .await
        .map_err(|e| {
            tracing::error!("[Chat] Failed to store message: {}", e);
            BackendError::from(e)
        })?;

    enforce_cap(&app_state.db, app_state.config.max_messages)
        .await
        .map_err(|e| {
            tracing::error!("[Chat] Retention trim failed: {}", e);
            BackendError::from(e)
        })?;

    tracing::info!(
        "[Chat] Message {} stored from {} ({})",
        message.id,
        message.prenom,
        message.filiaire
    );

    broadcast_event(&app_state.realtime_broadcast, RealtimeEvent::chat_new(&message)).await;

    Ok(message)
}
