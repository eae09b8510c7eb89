/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Route Order
 *
 * 1. Chat routes (page, WebSocket, SSE)
 * 2. Cross-origin routes, each wrapped in the CORS layer
 * 3. Static files
 * 4. Fallback handler (404)
 *
 * The CORS layer is attached to the cross-origin sub-router only, so the
 * page and the live-update endpoints never emit CORS headers.
 */

use axum::{http::StatusCode, Router};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::routes::chat_routes::configure_chat_routes;
use crate::backend::server::state::AppState;

/// Directory served under `/static`
pub const STATIC_DIR: &str = "static";

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = configure_chat_routes(Router::new());

    let router = router.merge(configure_api_routes(&app_state.config.cors_origins));

    let router = router.nest_service("/static", ServeDir::new(STATIC_DIR));

    let router = router.fallback(|| async { (StatusCode::NOT_FOUND, "404 Not Found") });

    router
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
