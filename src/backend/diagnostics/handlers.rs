/**
 * Diagnostics Handlers
 *
 * Both endpoints answer 500 with the driver's error text when the store
 * does not respond, instead of failing the connection.
 */

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::backend::diagnostics::report::{health_report, DebugReport};
use crate::backend::server::state::AppState;

/// Health check (GET /api/health)
pub async fn handle_health(State(app_state): State<AppState>) -> Response {
    match health_report(&app_state.db).await {
        Ok(report) => Json(report).into_response(),
        Err(e) => {
            tracing::error!("[DB] health error: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "ok": false, "error": e.to_string() })),
            )
                .into_response()
        }
    }
}

/// Backend introspection (GET /debug/db)
pub async fn handle_debug_db(State(app_state): State<AppState>) -> Response {
    let env = app_state.config.environment_name();
    let backend = app_state.db.kind();

    match DebugReport::collect(&app_state.db, &app_state.config).await {
        Ok(report) => {
            tracing::info!(
                "[DEBUG/DB] backend={}, version={}, total_rows={}",
                backend.as_str(),
                report.version,
                report.rows
            );
            Json(report).into_response()
        }
        Err(e) => {
            tracing::error!("[DEBUG/DB] {} error: {}", env, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "ok": false,
                    "env": env,
                    "backend": backend,
                    "error": e.to_string(),
                })),
            )
                .into_response()
        }
    }
}
