//! UseCase: ルーム状態取得処理（デバッグ用）

use crate::{actor::RoomHandle, domain::SubscriberId};

use super::error::QueryError;

/// ある時点のルームのメンバー
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomState {
    /// 登録順の subscriber ID
    pub subscribers: Vec<SubscriberId>,
}

/// ルーム状態取得のユースケース
pub struct GetRoomStateUseCase {
    room: RoomHandle,
}

impl GetRoomStateUseCase {
    pub fn new(room: RoomHandle) -> Self {
        Self { room }
    }

    pub async fn execute(&self) -> Result<RoomState, QueryError> {
        let subscribers = self.room.members().await?;
        Ok(RoomState { subscribers })
    }
}
