/**
 * Real-time Subscription Handler
 *
 * Server-Sent Events stream for the `/realtime` endpoint. Each event is
 * emitted with the event name (`chat:new`) in the `event:` field and the
 * message payload as JSON in the `data:` field, which is what a browser
 * `EventSource` listener expects:
 *
 * ```text
 * event: chat:new
 * data: {"prenom":"Lea","filiaire":"Info","commentaire":"Bonjour"}
 * ```
 *
 * # Connection Management
 *
 * - Connections are kept alive using the SSE keep-alive mechanism
 * - Lagged events are logged but don't cause connection drops
 * - The stream ends when the broadcast channel closes
 */

use axum::{
    extract::State,
    response::sse::{Event, KeepAlive, Sse},
};
use futures_util::stream;
use tokio::sync::broadcast::error::RecvError;

use crate::backend::realtime::broadcast::RealtimeEventBroadcast;
use crate::shared::RealtimeEvent;

/// Handle real-time subscription (GET /realtime)
pub async fn handle_realtime_subscription(
    State(broadcast_tx): State<RealtimeEventBroadcast>,
) -> Sse<impl tokio_stream::Stream<Item = Result<Event, axum::Error>>> {
    let broadcast_rx = broadcast_tx.subscribe();
    tracing::info!("[Realtime] SSE subscription active");

    // Only real events are yielded; keep-alive comments are injected by axum.
    let stream = stream::unfold(broadcast_rx, |mut rx| async move {
        loop {
            match rx.recv().await {
                Ok(event) => match sse_event(&event) {
                    Ok(sse_event) => return Some((Ok(sse_event), rx)),
                    Err(e) => {
                        tracing::error!("[Realtime] Failed to serialize event: {:?}", e);
                        continue;
                    }
                },
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!("[Realtime] SSE receiver lagged, skipped {} events", skipped);
                    continue;
                }
                Err(RecvError::Closed) => {
                    tracing::warn!("[Realtime] Broadcast channel closed, ending stream");
                    return None;
                }
            }
        }
    });

    Sse::new(stream).keep_alive(KeepAlive::default())
}

/// Encode one event as an SSE frame
fn sse_event(event: &RealtimeEvent) -> Result<Event, serde_json::Error> {
    let data = match event {
        RealtimeEvent::ChatNew(payload) => serde_json::to_string(payload)?,
    };
    Ok(Event::default().event(event.name()).data(data))
}
