//! Real-time Update Module
//!
//! Pushes every stored message to the viewers currently connected, as a
//! `chat:new` event carrying `{prenom, filiaire, commentaire}`.
//!
//! # Architecture
//!
//! - **`broadcast`** - Channel type and the fire-and-forget publish helper
//! - **`subscription`** - Server-Sent Events stream (`GET /realtime`)
//! - **`websocket`** - WebSocket fan-out (`GET /ws`)
//!
//! # Module Structure
//!
//! ```text
//! realtime/
//! ├── mod.rs          - Module exports and documentation
//! ├── broadcast.rs    - Event broadcasting utilities
//! ├── subscription.rs - SSE subscription handler
//! └── websocket.rs    - WebSocket connection handler
//! ```
//!
//! # Delivery
//!
//! Delivery is best effort. A viewer that connects after an event was
//! published does not receive it; a viewer that falls too far behind skips
//! the oldest events and keeps going. Nothing is persisted or replayed.
//!
//! # Example
//!
//! ```rust,no_run
//! use souvenir::backend::realtime::{broadcast_event, RealtimeEventBroadcast};
//! use souvenir::shared::{ChatPayload, RealtimeEvent};
//!
//! # async fn example(tx: RealtimeEventBroadcast) {
//! let event = RealtimeEvent::ChatNew(ChatPayload {
//!     prenom: "Lea".to_string(),
//!     filiaire: "Info".to_string(),
//!     commentaire: "Bonjour".to_string(),
//! });
//! let delivered = broadcast_event(&tx, event).await;
//! # }
//! ```

/// Event broadcasting utilities
pub mod broadcast;

/// Server-Sent Events subscription handler
pub mod subscription;

/// WebSocket subscription handler
pub mod websocket;

// Re-export commonly used types and functions
pub use broadcast::{broadcast_event, RealtimeEventBroadcast};
pub use subscription::handle_realtime_subscription;
pub use websocket::handle_websocket;
