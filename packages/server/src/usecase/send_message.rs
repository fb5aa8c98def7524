//! UseCase: メッセージ送信処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - SendMessageUseCase::execute() メソッド
//! - ペイロードの検証と Publish の発行
//!
//! ### なぜこのテストが必要か
//! - 不正なペイロードがコア（Broadcaster / History Store）に届かないことを保証する
//! - 正常なメッセージが全員に配信され、履歴に追加されることを確認する
//!
//! ### どのような状況を想定しているか
//! - 正常系：メッセージ送信とブロードキャスト
//! - 異常系：空の送信者名、空の本文
//! - エッジケース：送信者名の前後の空白

use crate::{
    actor::RoomHandle,
    domain::{MessageContent, SenderName},
};

use super::error::SendMessageError;

/// メッセージ送信のユースケース
pub struct SendMessageUseCase {
    room: RoomHandle,
}

impl SendMessageUseCase {
    pub fn new(room: RoomHandle) -> Self {
        Self { room }
    }

    /// メッセージ送信を実行
    ///
    /// 検証に通ったメッセージは Publish として Broadcaster に渡される。
    /// 配信の完了は待たない。
    ///
    /// # Arguments
    ///
    /// * `sender` - 送信者名（未検証）
    /// * `content` - メッセージ本文（未検証）
    pub fn execute(&self, sender: String, content: String) -> Result<(), SendMessageError> {
        let sender = SenderName::try_from(sender).map_err(SendMessageError::InvalidSender)?;
        let content = MessageContent::try_from(content).map_err(SendMessageError::InvalidContent)?;

        tracing::debug!("Publishing message from '{}'", sender.as_str());
        self.room.publish(sender.into_string(), content.into_string());
        Ok(())
    }
}
