//! Common test utilities and helpers
//!
//! This module provides shared utilities for all tests including:
//! - Throwaway SQLite databases
//! - A router wired to a test database, driven through `axum-test`
//! - Custom assertion macros
#![allow(dead_code)]

pub mod database;

// Re-export commonly used utilities
pub use app::*;
pub use database::*;
