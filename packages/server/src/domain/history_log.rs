//! HistoryLog trait 定義
//!
//! Room Broadcaster が履歴ストアに対して必要とするインターフェース。
//! 具体的な実装（メールボックス経由のハンドル）は actor 層が提供する。

use super::{ChatMessage, Subscriber};

/// Fire-and-forget access to the message history.
///
/// Both operations only enqueue a command; neither waits for it to be applied
/// and neither reports failure to the caller.
#[cfg_attr(test, mockall::automock)]
pub trait HistoryLog: Send + Sync {
    /// Append `message` to the end of the log.
    fn append(&self, message: ChatMessage);

    /// Replay every message in the log, oldest first, to `destination`.
    fn get_recent(&self, destination: Subscriber);
}
