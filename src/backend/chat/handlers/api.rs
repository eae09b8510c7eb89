/**
 * JSON Submission Handler
 *
 * `POST /api/chat` with a body of the form
 * `{"prenom": "...", "filiaire": "...", "commentaire": "..."}`.
 *
 * Body parsing is lenient: a body that is not JSON, or not an object with
 * string fields, is treated as an empty submission and therefore rejected
 * with the usual missing-fields error rather than a parse error.
 */

use axum::{extract::State, Json};
use bytes::Bytes;
use serde_json::{json, Value};

use crate::backend::chat::submit::record_submission;
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;
use crate::shared::RawSubmission;

/// Handle a JSON submission (POST /api/chat)
///
/// # Returns
///
/// * `200 {"ok": true}` - the message was stored and published
///
/// # Errors
///
/// * `400 {"ok": false, "error": "Tous les champs sont requis."}` - a field is missing or blank
/// * `500 {"ok": false, "error": ...}` - the store failed
pub async fn handle_api_chat(
    State(app_state): State<AppState>,
    body: Bytes,
) -> Result<Json<Value>, BackendError> {
    let raw = parse_submission(&body);
    record_submission(&app_state, &raw).await?;
    Ok(Json(json!({ "ok": true })))
}

fn parse_submission(body: &[u8]) -> RawSubmission {
    serde_json::from_slice(body).unwrap_or_else(|e| {
        tracing::debug!("[Chat] Unparseable JSON body treated as empty: {}", e);
        RawSubmission::default()
    })
}
