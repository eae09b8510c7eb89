/**
 * Form Submission Handler
 *
 * `POST /post` with either an url-encoded body (the `<form>` on the page)
 * or a `multipart/form-data` body (a `fetch` with `FormData`). The client
 * is redirected back to the feed whatever the outcome of validation; an
 * incomplete or unreadable form is dropped silently.
 */

use axum::{
    extract::{multipart::MultipartError, FromRequest, Multipart, Request, State},
    http::header::CONTENT_TYPE,
    response::Redirect,
    Form,
};

use crate::backend::chat::submit::record_submission;
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;
use crate::shared::{RawSubmission, SharedError};

/// Handle a form submission (POST /post)
///
/// # Returns
///
/// `303 See Other` to `/`, whether the message was stored or dropped
///
/// # Errors
///
/// * `500 {"ok": false, "error": ...}` - the store failed
pub async fn handle_form_post(
    State(app_state): State<AppState>,
    request: Request,
) -> Result<Redirect, BackendError> {
    let raw = read_form(request, &app_state).await;

    match record_submission(&app_state, &raw).await {
        Ok(_) => {}
        Err(BackendError::Shared(SharedError::MissingFields { fields })) => {
            tracing::debug!("[Chat] Incomplete form dropped (missing: {})", fields.join(", "));
        }
        Err(e) => return Err(e),
    }

    Ok(Redirect::to("/"))
}

/// Read the three fields from either form encoding
///
/// Anything unreadable becomes an empty submission.
async fn read_form(request: Request, app_state: &AppState) -> RawSubmission {
    if is_multipart(&request) {
        let fields = match Multipart::from_request(request, app_state).await {
            Ok(multipart) => read_multipart(multipart).await,
            Err(rejection) => Err(rejection.to_string()),
        };
        return fields.unwrap_or_else(|e| {
            tracing::debug!("[Chat] Unreadable multipart form treated as empty: {}", e);
            RawSubmission::default()
        });
    }

    match Form::<RawSubmission>::from_request(request, app_state).await {
        Ok(Form(raw)) => raw,
        Err(rejection) => {
            tracing::debug!("[Chat] Unreadable form treated as empty: {}", rejection);
            RawSubmission::default()
        }
    }
}

fn is_multipart(request: &Request) -> bool {
    request
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.trim_start().starts_with("multipart/form-data"))
}

/// Collect the known fields of a multipart body; unknown parts are skipped
async fn read_multipart(mut multipart: Multipart) -> Result<RawSubmission, String> {
    let mut raw = RawSubmission::default();

    while let Some(field) = multipart.next_field().await.map_err(describe)? {
        let name = field.name().map(str::to_string);
        let value = field.text().await.map_err(describe)?;
        match name.as_deref() {
            Some("prenom") => raw.prenom = Some(value),
            Some("filiaire") => raw.filiaire = Some(value),
            Some("commentaire") => raw.commentaire = Some(value),
            _ => {}
        }
    }

    Ok(raw)
}

fn describe(err: MultipartError) -> String {
    err.body_text()
}
