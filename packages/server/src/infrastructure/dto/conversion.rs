//! Conversion logic between DTOs and domain types.

use crate::{
    domain::entity,
    infrastructure::dto::{http, websocket as dto},
    usecase::RoomState,
};

// ========================================
// Domain → DTO
// ========================================

impl From<entity::ChatMessage> for dto::ChatMessage {
    fn from(model: entity::ChatMessage) -> Self {
        let (sender, content) = model.into_parts();
        Self {
            r#type: dto::MessageType::Chat,
            sender,
            content,
        }
    }
}

impl From<Vec<entity::ChatMessage>> for http::HistoryDto {
    fn from(messages: Vec<entity::ChatMessage>) -> Self {
        Self {
            count: messages.len(),
            messages: messages.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<RoomState> for http::RoomStateDto {
    fn from(state: RoomState) -> Self {
        Self {
            subscriber_count: state.subscribers.len(),
            subscribers: state.subscribers.iter().map(ToString::to_string).collect(),
        }
    }
}
