//! Agora: an in-process publish/subscribe chat room.
//!
//! Two serialized command processors form the core: a room broadcaster that
//! tracks live subscribers and fans messages out to them, and a history
//! store that keeps every message and replays it to newcomers. An Axum
//! WebSocket adapter sits in front of them.

// layers
pub mod actor;
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

use std::sync::Arc;

use actor::{HistoryHandle, HistoryStore, RoomBroadcaster, RoomHandle};
use usecase::{
    GetHistoryUseCase, GetRoomStateUseCase, JoinRoomUseCase, LeaveRoomUseCase, SendMessageUseCase,
};

/// Handles to the running core.
///
/// Constructed once at startup and passed to whatever needs to reach the
/// core. Dropping every clone of both handles stops the two tasks.
#[derive(Debug, Clone)]
pub struct ChatCore {
    pub room: RoomHandle,
    pub history: HistoryHandle,
}

impl ChatCore {
    /// Spawn the history store and the room broadcaster wired to it.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start() -> Self {
        let (history, _history_task) = HistoryStore::new().spawn();
        let (room, _room_task) = RoomBroadcaster::new(Arc::new(history.clone())).spawn();
        tracing::info!("Chat core started");
        Self { room, history }
    }

    /// Build the transport adapter on top of this core.
    pub fn server(&self) -> ui::Server {
        ui::Server::new(
            Arc::new(JoinRoomUseCase::new(self.room.clone())),
            Arc::new(LeaveRoomUseCase::new(self.room.clone())),
            Arc::new(SendMessageUseCase::new(self.room.clone())),
            Arc::new(GetHistoryUseCase::new(self.history.clone())),
            Arc::new(GetRoomStateUseCase::new(self.room.clone())),
        )
    }
}
