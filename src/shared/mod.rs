//! Shared Module
//!
//! This module contains the types that describe guestbook messages and the
//! events pushed to live viewers. They carry no dependency on the server
//! stack, so the validation rules can be reused and tested on their own.

/// Chat message data structures and field limits
pub mod message;

/// Real-time event system
pub mod event;

/// Shared error types
pub mod error;

/// Re-export commonly used types for convenience
pub use message::{ChatMessage, ChatPayload, RawSubmission, Submission};
pub use event::RealtimeEvent;
pub use error::SharedError;
