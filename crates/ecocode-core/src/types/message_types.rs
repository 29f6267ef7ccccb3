//! Chat message types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who authored a chat message
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Assistant,
}

/// A single chat message. Immutable once appended to the history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    pub content: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
}

impl Message {
    /// Create a user message with a fresh id
    pub fn user(content: impl Into<String>) -> Self {
        Self::with_id(uuid::Uuid::new_v4().to_string(), content, Sender::User)
    }

    /// Create an assistant message with a fresh id
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::with_id(uuid::Uuid::new_v4().to_string(), content, Sender::Assistant)
    }

    /// Create a message with an explicit id, timestamped now
    pub fn with_id(id: impl Into<String>, content: impl Into<String>, sender: Sender) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            sender,
            timestamp: Utc::now(),
        }
    }

    pub fn is_user(&self) -> bool {
        self.sender == Sender::User
    }

    pub fn is_assistant(&self) -> bool {
        self.sender == Sender::Assistant
    }
}
