/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * The `AppState` struct serves as the central state container for the
 * application, holding:
 * - The selected persistence backend
 * - The broadcast channel for real-time events
 * - The compiled template environment
 * - The server configuration
 *
 * # Thread Safety
 *
 * Nothing in the state needs a lock:
 * - `Database` wraps a reference-counted connection pool
 * - `broadcast::Sender` is thread-safe and can be cloned
 * - Templates and configuration are read-only behind `Arc`
 *
 * # Example
 *
 * ```rust,no_run
 * use souvenir::backend::server::state::AppState;
 * use axum::extract::State;
 *
 * async fn handler(State(state): State<AppState>) {
 *     let cap = state.config.max_messages;
 *     // ...
 * }
 * ```
 */

use axum::extract::FromRef;
use minijinja::Environment;
use std::sync::Arc;
use tokio::sync::broadcast;

use crate::backend::chat::templates;
use crate::backend::error::BackendError;
use crate::backend::realtime::broadcast::RealtimeEventBroadcast;
use crate::backend::server::config::ServerConfig;
use crate::backend::server::database::Database;
use crate::shared::RealtimeEvent;

/// Capacity of the real-time event channel
///
/// A subscriber lagging further behind than this loses the oldest events.
pub const BROADCAST_CAPACITY: usize = 1000;

/// Application state shared by every handler
///
/// # Fields
///
/// * `db` - Selected backend (PostgreSQL or SQLite)
/// * `realtime_broadcast` - Sender for `chat:new` events
/// * `templates` - Template environment for the HTML feed
/// * `config` - Configuration the server was started with
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub realtime_broadcast: RealtimeEventBroadcast,
    pub templates: Arc<Environment<'static>>,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Build the state around an already selected backend
    ///
    /// # Errors
    ///
    /// `BackendError::Template` if the embedded templates fail to compile.
    pub fn new(config: ServerConfig, db: Database) -> Result<Self, BackendError> {
        let (realtime_broadcast, _) = broadcast::channel::<RealtimeEvent>(BROADCAST_CAPACITY);

        Ok(Self {
            db,
            realtime_broadcast,
            templates: Arc::new(templates::environment()?),
            config: Arc::new(config),
        })
    }
}

/// Implement FromRef for Database
///
/// This allows Axum handlers to extract the backend directly
/// using `State(Database)`.
impl FromRef<AppState> for Database {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db.clone()
    }
}

/// Implement FromRef for RealtimeEventBroadcast
///
/// This allows Axum handlers to extract the real-time event broadcast
/// sender directly from `AppState`.
impl FromRef<AppState> for RealtimeEventBroadcast {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.realtime_broadcast.clone()
    }
}

impl FromRef<AppState> for Arc<ServerConfig> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.config.clone()
    }
}
