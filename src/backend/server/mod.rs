//! Server Module
//!
//! Everything needed to turn the process environment into a running Axum
//! application.
//!
//! # Architecture
//!
//! - **`config`** - Environment-sourced configuration and connection-string assembly
//! - **`database`** - Backend selection (PostgreSQL or SQLite fallback) and schema setup
//! - **`state`** - `AppState` and its `FromRef` implementations
//! - **`init`** - Application creation
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: `ServerConfig::from_env`
//! 2. **Backend Selection**: PostgreSQL when configured and reachable, SQLite file otherwise
//! 3. **Schema**: table and index created if missing
//! 4. **State Creation**: broadcast channel, template environment
//! 5. **Router Creation**: routes, CORS and tracing layers

/// Server configuration loading
pub mod config;

/// Persistence backend selection
pub mod database;

/// Application state management
pub mod state;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use state::AppState;
pub use init::{build_app, create_app};
