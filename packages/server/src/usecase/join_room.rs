//! UseCase: ルーム参加処理
//!
//! 接続ごとに Subscriber を生成して Room Broadcaster に登録する。
//! 過去ログの再生は Broadcaster が History Store に依頼するため、
//! このユースケースは再生の完了を待たない。

use crate::{
    actor::RoomHandle,
    domain::{Subscriber, SubscriberInbox},
};

/// ルーム参加のユースケース
pub struct JoinRoomUseCase {
    room: RoomHandle,
}

impl JoinRoomUseCase {
    pub fn new(room: RoomHandle) -> Self {
        Self { room }
    }

    /// 参加を実行
    ///
    /// # Returns
    ///
    /// 登録した Subscriber と、その受信箱（過去ログ→ライブ配信の順に届く）
    pub fn execute(&self) -> (Subscriber, SubscriberInbox) {
        let (subscriber, inbox) = Subscriber::channel();
        self.room.register(subscriber.clone());
        tracing::debug!("Subscriber '{}' joining the room", subscriber.id());
        (subscriber, inbox)
    }
}
