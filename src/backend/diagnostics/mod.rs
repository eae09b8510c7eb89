//! Diagnostics Module
//!
//! Read-only endpoints for checking which backend the server ended up on
//! and whether it answers.
//!
//! - **`GET /api/health`** - Round trip plus row count; also used to wake a
//!   sleeping hosted database before the first real request
//! - **`GET /debug/db`** - Backend kind, version and row count; identity
//!   details (database name, host) only outside production
//!
//! `report` builds the payload independently of HTTP so the
//! `debug_db_connection` binary can print the same data.

/// Diagnostic reports
pub mod report;

/// HTTP handlers
pub mod handlers;

pub use handlers::{handle_debug_db, handle_health};
pub use report::{health_report, DebugReport, HealthReport};
