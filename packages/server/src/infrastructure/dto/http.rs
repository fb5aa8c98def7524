//! HTTP API response DTOs.

use serde::Serialize;

use super::websocket::ChatMessage;

/// `GET /api/history`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryDto {
    pub count: usize,
    pub messages: Vec<ChatMessage>,
}

/// `GET /debug/room`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoomStateDto {
    pub subscriber_count: usize,
    pub subscribers: Vec<String>,
}
