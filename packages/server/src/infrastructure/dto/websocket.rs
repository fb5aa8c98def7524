//! WebSocket frame DTOs.

use serde::{Deserialize, Serialize};

/// Frame type tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MessageType {
    Chat,
}

/// Outbound chat frame, one per delivered message (history replay or live)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub r#type: MessageType,
    pub sender: String,
    pub content: String,
}

/// Inbound frame sent by a client to publish a message
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SendMessageRequest {
    pub sender: String,
    pub content: String,
}
