//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//! Routes are organized by audience into focused submodules.
//!
//! # Architecture
//!
//! - **`router`** - Main router creation and layer assembly
//! - **`chat_routes`** - Same-origin routes (page, live updates)
//! - **`api_routes`** - Cross-origin routes and the CORS policy
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation
//! ├── chat_routes.rs  - Page and real-time routes
//! └── api_routes.rs   - API, form and debug routes with CORS
//! ```
//!
//! # Route Types
//!
//! ## Chat Routes (no CORS)
//!
//! - `GET /` - HTML feed
//! - `GET /ws` - WebSocket `chat:new` stream
//! - `GET /realtime` - SSE `chat:new` stream
//!
//! ## Cross-origin Routes
//!
//! - `POST /api/chat` - JSON submission
//! - `GET /api/health` - Health check
//! - `POST /post` - Form submission
//! - `GET /debug/db` - Backend diagnostics
//!
//! ## Static Files
//!
//! - `GET /static/*` - Stylesheet and other assets from `static/`

/// Main router creation
pub mod router;

/// Page and real-time routes
pub mod chat_routes;

/// Cross-origin routes and CORS policy
pub mod api_routes;

// Re-export commonly used functions
pub use router::create_router;
