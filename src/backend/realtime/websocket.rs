//! WebSocket handler for live guestbook updates.
//!
//! The `/ws` endpoint upgrades an HTTP connection to a WebSocket. Once
//! connected, every event published on the broadcast channel is pushed to
//! the client as a JSON text frame:
//!
//! ```json
//! {"event":"chat:new","data":{"prenom":"Lea","filiaire":"Info","commentaire":"Bonjour"}}
//! ```
//!
//! The only client message understood is `{"type":"ping"}`, answered with
//! `{"type":"pong"}`. Anything else is ignored.

use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::State;
use axum::response::IntoResponse;
use futures_util::{SinkExt, StreamExt};
use serde::Deserialize;
use tokio::sync::broadcast;

use crate::backend::realtime::broadcast::RealtimeEventBroadcast;

const PONG: &str = r#"{"type":"pong"}"#;

/// Incoming client frame
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ClientFrame {
    Ping,
}

/// Upgrade an HTTP request to a WebSocket connection (GET /ws)
pub async fn handle_websocket(
    ws: WebSocketUpgrade,
    State(broadcast_tx): State<RealtimeEventBroadcast>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_ws_connection(socket, broadcast_tx))
}

/// Multiplex broadcast events and client frames on a single task
async fn handle_ws_connection(socket: WebSocket, broadcast_tx: RealtimeEventBroadcast) {
    let (mut ws_sender, mut ws_receiver) = socket.split();
    let mut event_rx = broadcast_tx.subscribe();

    tracing::info!("[Realtime] WebSocket viewer connected");

    loop {
        tokio::select! {
            event_result = event_rx.recv() => {
                match event_result {
                    Ok(event) => match serde_json::to_string(&event) {
                        Ok(json) => {
                            if ws_sender.send(Message::Text(json.into())).await.is_err() {
                                break;
                            }
                        }
                        Err(err) => {
                            tracing::warn!("[Realtime] Failed to serialize event: {err}");
                        }
                    },
                    Err(broadcast::error::RecvError::Lagged(n)) => {
                        tracing::warn!("[Realtime] WebSocket viewer lagged, skipping {n} events");
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                }
            }

            msg_result = ws_receiver.next() => {
                match msg_result {
                    Some(Ok(Message::Text(text))) => {
                        if matches!(serde_json::from_str::<ClientFrame>(text.as_str()), Ok(ClientFrame::Ping))
                            && ws_sender.send(Message::Text(PONG.into())).await.is_err()
                        {
                            break;
                        }
                    }
                    Some(Ok(Message::Close(_))) | None => break,
                    Some(Err(err)) => {
                        tracing::debug!("[Realtime] WebSocket receive error: {err}");
                        break;
                    }
                    Some(Ok(_)) => {}
                }
            }
        }
    }

    tracing::info!("[Realtime] WebSocket viewer disconnected");
}
