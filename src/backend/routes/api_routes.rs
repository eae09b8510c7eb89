/**
 * API Route Handlers
 *
 * Routes reachable from the static front-end hosted on another origin,
 * together with the CORS policy that guards them.
 *
 * # Routes
 *
 * - `POST /api/chat` - JSON submission
 * - `GET /api/health` - Health check
 * - `POST /post` - Form submission
 * - `GET /debug/db` - Backend diagnostics
 *
 * # CORS Policy
 *
 * - Origins: the configured allow-list only
 * - Methods: `GET`, `POST`, `OPTIONS`
 * - Request headers: `Content-Type`
 * - No credentials
 */

use axum::{
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;

use crate::backend::chat::handlers::{handle_api_chat, handle_form_post};
use crate::backend::diagnostics::{handle_debug_db, handle_health};
use crate::backend::server::state::AppState;

/// Configure the cross-origin routes, wrapped in the CORS layer
pub fn configure_api_routes(cors_origins: &[String]) -> Router<AppState> {
    Router::new()
        .route("/api/chat", post(handle_api_chat))
        .route("/api/health", get(handle_health))
        .route("/post", post(handle_form_post))
        .route("/debug/db", get(handle_debug_db))
        .layer(cors_layer(cors_origins))
}

/// CORS layer restricted to `cors_origins`
///
/// Entries that are not valid header values are skipped with a warning.
pub fn cors_layer(cors_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = cors_origins
        .iter()
        .filter_map(|origin| match origin.trim().parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("[Startup] Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .allow_credentials(false)
}
