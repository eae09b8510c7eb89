//! Shared Error Types
//!
//! Errors that can be produced without the server stack: submission
//! validation.
//!
//! # Usage
//!
//! ```rust
//! use souvenir::shared::error::SharedError;
//!
//! let error = SharedError::missing_fields(vec!["prenom".to_string()]);
//! assert_eq!(error.to_string(), "Tous les champs sont requis.");
//! ```
use thiserror::Error;

/// Shared error types
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// One or more required fields were absent or blank
    ///
    /// The display text is the message returned to API clients, so it is
    /// the same whatever the failing fields are.
    #[error("Tous les champs sont requis.")]
    MissingFields {
        /// Names of the offending fields, in form order
        fields: Vec<String>,
    },
}

impl SharedError {
    /// Create a new missing-fields error
    pub fn missing_fields(fields: Vec<String>) -> Self {
        Self::MissingFields { fields }
    }
}
