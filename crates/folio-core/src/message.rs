//! Chat transcript message types.
//!
//! This module contains types for representing messages in a chat
//! transcript, including roles and message content.

use serde::{Deserialize, Serialize};

/// Represents the role of a message in the transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageRole {
    /// Message from the site visitor.
    User,
    /// Message from the AI assistant.
    Assistant,
}

/// A single message in a chat transcript.
///
/// Each message has a role (user or assistant), content, and a timestamp
/// indicating when it was created. Messages are never mutated after
/// creation and live only for the duration of the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Unique identifier for the message.
    pub id: String,
    /// The role of the message sender.
    pub role: MessageRole,
    /// The content of the message.
    pub content: String,
    /// Timestamp when the message was created (ISO 8601 format).
    pub timestamp: String,
}

impl ChatMessage {
    /// Creates a message with a fresh UUID and the current UTC timestamp.
    pub fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            role,
            content: content.into(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Creates a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(MessageRole::User, content)
    }

    /// Creates an assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(MessageRole::Assistant, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_get_unique_ids() {
        let a = ChatMessage::user("hello");
        let b = ChatMessage::user("hello");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_role_constructors() {
        assert_eq!(ChatMessage::user("x").role, MessageRole::User);
        assert_eq!(ChatMessage::assistant("x").role, MessageRole::Assistant);
    }
}
