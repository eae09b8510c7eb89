/**
 * Real-time Event System
 *
 * This module defines the events pushed to live viewers. Events are
 * serialized as `{"event": <name>, "data": <payload>}` so that a browser
 * client can dispatch on the event name, the way it would with a
 * Socket.IO-style channel.
 */
use serde::{Deserialize, Serialize};

use crate::shared::message::{ChatMessage, ChatPayload};

/// Wire name of the new-message event
pub const CHAT_NEW: &str = "chat:new";

/// Real-time event that can be broadcast to all subscribers
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "event", content = "data")]
pub enum RealtimeEvent {
    /// A message was stored
    #[serde(rename = "chat:new")]
    ChatNew(ChatPayload),
}

impl RealtimeEvent {
    /// Create a new-message event from a stored message
    pub fn chat_new(message: &ChatMessage) -> Self {
        Self::ChatNew(message.payload())
    }

    /// Event name, as used for the SSE `event:` field
    pub fn name(&self) -> &'static str {
        match self {
            Self::ChatNew(_) => CHAT_NEW,
        }
    }
}
