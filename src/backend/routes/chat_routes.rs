/**
 * Chat Route Handlers
 *
 * Same-origin routes: the feed page and the two live-update streams.
 *
 * # Routes
 *
 * - `GET /` - HTML feed, newest first
 * - `GET /ws` - WebSocket, one JSON frame per `chat:new`
 * - `GET /realtime` - Server-Sent Events, one `chat:new` event per message
 */

use axum::{routing::get, Router};

use crate::backend::chat::handlers::handle_index;
use crate::backend::realtime::{handle_realtime_subscription, handle_websocket};
use crate::backend::server::state::AppState;

/// Configure chat routes
pub fn configure_chat_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/", get(handle_index))
        .route("/ws", get(handle_websocket))
        .route("/realtime", get(handle_realtime_subscription))
}
