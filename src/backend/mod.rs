//! Backend Module
//!
//! This module contains all server-side code for the Souvenir guestbook.
//! It provides an Axum HTTP server that stores messages, keeps the feed
//! capped, and pushes every new message to live viewers.
//!
//! This module is only compiled when the `ssr` feature is enabled.
//!
//! # Architecture
//!
//! - **`server`** - Configuration, backend selection, application state, app creation
//! - **`routes`** - Router assembly and CORS policy
//! - **`chat`** - Message persistence, retention, submission handlers, HTML feed
//! - **`realtime`** - Event broadcasting, WebSocket and SSE fan-out
//! - **`diagnostics`** - Health and backend introspection endpoints
//! - **`error`** - Backend-specific error types
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── server/         - Config, database selection, state, init
//! ├── routes/         - Route configuration
//! ├── chat/           - Chat persistence and handlers
//! ├── realtime/       - Event broadcasting
//! ├── diagnostics/    - Health and debug endpoints
//! └── error/          - Error types
//! ```
//!
//! # Request Flow
//!
//! A submission (JSON or form) is validated, inserted, followed by the
//! retention trim, then published on the broadcast channel before the
//! response is written. Publishing never blocks and never fails the
//! request; a broadcast with no listener is simply dropped.
//!
//! # State Management
//!
//! `AppState` holds the selected `Database`, the broadcast sender, the
//! template environment and the configuration. It is cheap to clone and
//! handed to every handler through Axum's `State` extractor.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Chat-related backend functionality
pub mod chat;

/// Real-time update system
pub mod realtime;

/// Health and backend diagnostics
pub mod diagnostics;

/// Backend error types
pub mod error;

/// Re-export commonly used types
pub use server::create_app;
pub use server::database::{BackendKind, Database};
pub use realtime::{broadcast_event, RealtimeEventBroadcast};
pub use error::BackendError;
