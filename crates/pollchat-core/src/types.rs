//! Core types — Message, MessageList, NewMessage.

use serde::{Deserialize, Serialize};

/// Endpoint both polled and posted to.
pub const MESSAGES_PATH: &str = "/api/messages";

/// Longest sender name the server keeps.
pub const MAX_NAME_CHARS: usize = 20;

/// Longest message text the server keeps.
pub const MAX_TEXT_CHARS: usize = 200;

// ── Messages ──

/// A server-assigned chat entry. Ids increase with every post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: u64,
    pub name: String,
    pub text: String,
    /// Seconds since the Unix epoch.
    pub timestamp: f64,
}

/// Body of `GET /api/messages`, oldest first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessageList {
    #[serde(default)]
    pub messages: Option<Vec<Message>>,
}

impl MessageList {
    /// Absent and `null` both mean "no messages yet".
    pub fn into_messages(self) -> Vec<Message> {
        self.messages.unwrap_or_default()
    }
}

/// Id of the newest message, 0 for an empty list.
pub fn last_id(messages: &[Message]) -> u64 {
    messages.last().map(|m| m.id).unwrap_or(0)
}

// ── Outbound ──

/// Body of `POST /api/messages`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMessage {
    pub name: String,
    pub text: String,
}
