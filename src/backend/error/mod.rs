//! Backend Error Module
//!
//! This module defines error types specific to the backend server.
//! These errors are used in HTTP handlers and can be converted to HTTP responses.
//!
//! # Architecture
//!
//! - **`types`** - Error type definitions and constructors
//! - **`conversion`** - `IntoResponse` and `From` implementations
//!
//! # Error Types
//!
//! - `Database` - Any failure reported by the selected store
//! - `Template` - Rendering failures of the HTML feed
//! - `Shared` - Validation errors from the shared module
//!
//! # HTTP Response Conversion
//!
//! All backend errors implement `IntoResponse`, producing the same
//! `{"ok": false, "error": "..."}` body the submission endpoints use.
//!
//! # Example
//!
//! ```rust,no_run
//! use souvenir::backend::error::BackendError;
//! use axum::Json;
//!
//! async fn handler() -> Result<Json<serde_json::Value>, BackendError> {
//!     Ok(Json(serde_json::json!({ "ok": true })))
//! }
//! ```

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::BackendError;
