//! UseCase 層
//!
//! UI 層（WebSocket / HTTP ハンドラ）から呼ばれるアプリケーションロジック。
//! コアのアクターにはハンドル経由でのみアクセスする。

mod error;
mod get_history;
mod get_room_state;
mod join_room;
mod leave_room;
mod send_message;

pub use error::{QueryError, SendMessageError};
pub use get_history::GetHistoryUseCase;
pub use get_room_state::{GetRoomStateUseCase, RoomState};
pub use join_room::JoinRoomUseCase;
pub use leave_room::LeaveRoomUseCase;
pub use send_message::SendMessageUseCase;
