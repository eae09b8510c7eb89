//! Chat Backend Module
//!
//! This module contains all server-side guestbook functionality:
//! - Message persistence and the retention trim
//! - The shared submission pipeline
//! - HTTP handlers for the page, the JSON API and the form
//! - HTML rendering of the feed
//!
//! # Architecture
//!
//! - **`db`** - Queries against the selected backend
//! - **`submit`** - Validate, store, trim, publish
//! - **`handlers`** - Axum handlers
//! - **`templates`** - `minijinja` environment and page rendering
//!
//! # Example
//!
//! ```rust,no_run
//! use souvenir::backend::chat::submit::record_submission;
//! use souvenir::backend::server::AppState;
//! use souvenir::shared::RawSubmission;
//!
//! # async fn example(state: AppState) -> Result<(), souvenir::backend::BackendError> {
//! let raw = RawSubmission::new("Lea", "Info", "Bonjour");
//! let message = record_submission(&state, &raw).await?;
//! # Ok(())
//! # }
//! ```

/// Database operations for chat messages
pub mod db;

/// Shared submission pipeline
pub mod submit;

/// HTTP handlers
pub mod handlers;

/// Page templates
pub mod templates;

/// Re-export commonly used items
pub use db::{count_messages, enforce_cap, insert_message, list_messages};
pub use handlers::{handle_api_chat, handle_form_post, handle_index};
pub use submit::record_submission;
