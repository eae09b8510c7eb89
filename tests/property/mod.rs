//! Property-based tests

mod event_proptest;
mod message_proptest;
#[cfg(feature = "ssr")]
mod retention_proptest;
