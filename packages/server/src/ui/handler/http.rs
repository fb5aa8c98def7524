//! HTTP API endpoint handlers.

use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode};

use crate::{
    infrastructure::dto::http::{HistoryDto, RoomStateDto},
    ui::state::AppState,
};

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// Full message history, oldest first
pub async fn get_history(
    State(state): State<Arc<AppState>>,
) -> Result<Json<HistoryDto>, StatusCode> {
    match state.get_history_usecase.execute().await {
        Ok(messages) => Ok(Json(messages.into())),
        Err(e) => {
            tracing::error!("Failed to get history: {}", e);
            Err(StatusCode::SERVICE_UNAVAILABLE)
        }
    }
}

/// Debug endpoint to get current room membership (for testing purposes)
pub async fn debug_room_state(
    State(state): State<Arc<AppState>>,
) -> Result<Json<RoomStateDto>, StatusCode> {
    match state.get_room_state_usecase.execute().await {
        Ok(room_state) => Ok(Json(room_state.into())),
        Err(e) => {
            tracing::error!("Failed to get room state: {}", e);
            Err(StatusCode::SERVICE_UNAVAILABLE)
        }
    }
}
