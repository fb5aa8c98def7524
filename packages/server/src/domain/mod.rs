//! Domain layer: chat messages, subscribers and the history seam.
//!
//! このモジュールはソケットも HTML も知らない。
//! 外側の層（actor, usecase, ui）はここで定義された型だけを介してやり取りする。

pub mod entity;
pub mod error;
pub mod history_log;
pub mod subscriber;
pub mod value_object;

pub use entity::ChatMessage;
pub use error::{DeliveryError, ValueObjectError};
pub use history_log::HistoryLog;
#[cfg(test)]
pub use history_log::MockHistoryLog;
pub use subscriber::{Subscriber, SubscriberId, SubscriberInbox};
pub use value_object::{MessageContent, SenderName};
