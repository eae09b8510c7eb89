//! Souvenir - Main Library
//!
//! Souvenir is a small guestbook server: visitors leave their first name,
//! their field of study and a comment, and everybody currently watching the
//! page sees the new entry appear in real time.
//!
//! # Overview
//!
//! This library provides:
//! - Persistence in PostgreSQL when configured, with a local SQLite file as fallback
//! - A capped feed (the most recent messages only, older ones are trimmed on every insert)
//! - Real-time `chat:new` broadcasts over WebSocket and Server-Sent Events
//! - A server-rendered page, a JSON API and a classic form endpoint
//!
//! # Module Structure
//!
//! - **`shared`** - Types usable without the server stack
//!   - Chat message structures and field limits
//!   - Real-time event types
//!   - Error types
//!
//! - **`backend`** - Server-side code (only compiled with `ssr` feature)
//!   - Axum HTTP server, routes and CORS policy
//!   - Backend selection and message persistence
//!   - Retention and real-time broadcasting
//!   - Diagnostics endpoints
//!
//! # Feature Flags
//!
//! - **`ssr`** (default) - Enables the `backend` module and the server binary
//!
//! # Usage
//!
//! ```rust,no_run
//! use souvenir::backend::server::{config::ServerConfig, create_app};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(config).await?;
//! // Serve `app` with axum::serve
//! # Ok(())
//! # }
//! ```

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
#[cfg(feature = "ssr")]
pub mod backend;
