/**
 * Real-time Event Broadcasting
 *
 * Events are broadcast using `tokio::sync::broadcast`, a multi-producer,
 * multi-consumer channel. Every subscriber (WebSocket or SSE connection)
 * receives its own copy of each event.
 *
 * Publishing never blocks and never fails the caller: with no subscriber
 * the event is simply dropped.
 */

use crate::shared::RealtimeEvent;
use tokio::sync::broadcast;

/// Real-time event broadcast channel
///
/// # Usage
///
/// ```rust
/// use souvenir::backend::realtime::RealtimeEventBroadcast;
/// use souvenir::shared::RealtimeEvent;
/// use tokio::sync::broadcast;
///
/// let (tx, _) = broadcast::channel::<RealtimeEvent>(1000);
/// let broadcast: RealtimeEventBroadcast = tx;
/// ```
pub type RealtimeEventBroadcast = broadcast::Sender<RealtimeEvent>;

/// Broadcast a real-time event to all subscribers
///
/// # Returns
///
/// Number of active subscribers that received the event (0 if no subscribers)
pub async fn broadcast_event(
    broadcast_tx: &RealtimeEventBroadcast,
    event: RealtimeEvent,
) -> usize {
    let name = event.name();
    match broadcast_tx.send(event) {
        Ok(subscriber_count) => {
            tracing::info!("[Realtime] {} broadcast to {} subscribers", name, subscriber_count);
            subscriber_count
        }
        Err(_) => {
            tracing::debug!("[Realtime] No subscribers to receive {}", name);
            0
        }
    }
}
