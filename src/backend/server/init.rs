/**
 * Server Initialization
 *
 * This module handles the initialization and setup of the Axum HTTP server,
 * including backend selection, state creation and route configuration.
 *
 * # Initialization Process
 *
 * 1. Select the persistence backend and make sure the schema exists
 * 2. Create the broadcast channel and template environment
 * 3. Create and configure the router
 *
 * # Resilience
 *
 * An unreachable PostgreSQL server or a failed schema creation is logged
 * and startup continues. Only failing to open the SQLite fallback aborts.
 */

use axum::Router;

use crate::backend::error::BackendError;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::ServerConfig;
use crate::backend::server::database::Database;
use crate::backend::server::state::AppState;

/// Create and configure the Axum application
///
/// # Initialization Steps
///
/// 1. **Select Backend**: PostgreSQL when configured and reachable, SQLite otherwise
/// 2. **Create State**: broadcast channel, templates, configuration
/// 3. **Create Router**: routes, CORS and tracing layers
///
/// # Errors
///
/// `BackendError::Database` when no backend at all can be opened, or
/// `BackendError::Template` when the embedded page fails to compile.
pub async fn create_app(config: ServerConfig) -> Result<Router<()>, BackendError> {
    tracing::info!(
        "[Startup] Initializing Souvenir backend ({})",
        config.environment_name()
    );

    if config.production && config.uses_default_secret() {
        tracing::warn!("[Startup] SECRET_KEY is not set; using the development default in production");
    }

    let db = Database::prepare(&config.database).await?;
    let app_state = AppState::new(config, db)?;

    tracing::info!(
        "[Startup] Retention cap = {} messages",
        app_state.config.max_messages
    );

    Ok(build_app(app_state))
}

/// Build the router around an existing state
///
/// Used by `create_app`, and by tests that prepare their own backend.
pub fn build_app(app_state: AppState) -> Router<()> {
    let app = create_router(app_state);
    tracing::info!("[Startup] Router configured");
    app
}
