/**
 * Feed Page Handler
 *
 * `GET /` renders every stored message, newest first, together with the
 * submission form and the script that listens for `chat:new`.
 */

use axum::{extract::State, response::Html};

use crate::backend::chat::db::list_messages;
use crate::backend::chat::templates::render_index;
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;

/// Render the guestbook page (GET /)
pub async fn handle_index(State(app_state): State<AppState>) -> Result<Html<String>, BackendError> {
    let messages = list_messages(&app_state.db).await?;
    let page = render_index(&app_state.templates, &messages)?;
    Ok(Html(page))
}
