//! Chat Handlers Module
//!
//! Axum handlers for the guestbook endpoints.
//!
//! # Architecture
//!
//! - **`index`** - Feed page (GET /)
//! - **`api`** - JSON submission (POST /api/chat)
//! - **`form`** - Form submission (POST /post)
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs   - Module exports and documentation
//! ├── index.rs - HTML feed
//! ├── api.rs   - JSON submission handler
//! └── form.rs  - Form submission handler
//! ```
//!
//! Both submission handlers go through `chat::submit::record_submission`;
//! they differ only in how the body is read and how the outcome is
//! reported (JSON status versus a redirect).
//!
//! # Example
//!
//! ```rust,no_run
//! use souvenir::backend::chat::handlers::{handle_api_chat, handle_form_post, handle_index};
//! use souvenir::backend::server::AppState;
//! use axum::{routing::{get, post}, Router};
//!
//! # fn example() -> Router<AppState> {
//! Router::new()
//!     .route("/", get(handle_index))
//!     .route("/api/chat", post(handle_api_chat))
//!     .route("/post", post(handle_form_post))
//! # }
//! ```

/// JSON submission handler
pub mod api;

/// Form submission handler
pub mod form;

/// Feed page handler
pub mod index;

// Re-export commonly used handlers
pub use api::handle_api_chat;
pub use form::handle_form_post;
pub use index::handle_index;
