//! Conversation message types.
//!
//! This module contains types for representing messages in a conversation
//! transcript, including roles and attached follow-up suggestions.

use serde::{Deserialize, Serialize};

/// Represents the role of a message in a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageRole {
    /// Message from the user.
    User,
    /// Message from the simulated assistant.
    Assistant,
}

/// A single message in a conversation transcript.
///
/// Transcripts are append-only: a message is never reordered or mutated
/// after insertion. The timestamp is for display only; ordering is by
/// insertion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Unique message identifier.
    pub id: String,
    /// The role of the message sender.
    pub role: MessageRole,
    /// The content of the message.
    pub text: String,
    /// Timestamp when the message was created (ISO 8601 format).
    pub timestamp: String,
    /// Short follow-up prompts attached to an assistant message.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<String>,
}
