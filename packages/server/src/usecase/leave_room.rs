//! UseCase: ルーム退出処理

use crate::{actor::RoomHandle, domain::Subscriber};

/// ルーム退出のユースケース
///
/// 切断を検知したトランスポート層から呼ばれる。コアが自分から
/// subscriber を外すことはない。
pub struct LeaveRoomUseCase {
    room: RoomHandle,
}

impl LeaveRoomUseCase {
    pub fn new(room: RoomHandle) -> Self {
        Self { room }
    }

    pub fn execute(&self, subscriber: &Subscriber) {
        self.room.unregister(subscriber);
        tracing::debug!("Subscriber '{}' leaving the room", subscriber.id());
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{
        actor::{HistoryStore, RoomBroadcaster},
        usecase::JoinRoomUseCase,
    };

    #[tokio::test]
    async fn test_leave_unregisters_only_that_subscriber() {
        // テスト項目: 退出した subscriber だけがメンバーから外れる
        // given (前提条件):
        let (history, _history_task) = HistoryStore::new().spawn();
        let (room, _room_task) = RoomBroadcaster::new(Arc::new(history)).spawn();
        let join = JoinRoomUseCase::new(room.clone());
        let (alice, _alice_inbox) = join.execute();
        let (bob, _bob_inbox) = join.execute();
        let usecase = LeaveRoomUseCase::new(room.clone());

        // when (操作):
        usecase.execute(&alice);

        // then (期待する結果):
        assert_eq!(room.members().await.unwrap(), vec![bob.id()]);
    }

    #[tokio::test]
    async fn test_leave_twice_is_noop() {
        // テスト項目: 2 回目の退出はエラーにならず何も変えない
        // given (前提条件):
        let (history, _history_task) = HistoryStore::new().spawn();
        let (room, _room_task) = RoomBroadcaster::new(Arc::new(history)).spawn();
        let (alice, _inbox) = JoinRoomUseCase::new(room.clone()).execute();
        let usecase = LeaveRoomUseCase::new(room.clone());

        // when (操作):
        usecase.execute(&alice);
        usecase.execute(&alice);

        // then (期待する結果):
        assert!(room.members().await.unwrap().is_empty());
    }
}
