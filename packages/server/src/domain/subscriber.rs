//! Subscriber handles.
//!
//! A subscriber is one connected chat participant seen from the core: an
//! opaque endpoint that messages can be pushed to without waiting. The
//! transport layer owns the receiving half ([`SubscriberInbox`]) and turns
//! each delivered [`ChatMessage`] into a wire frame.

use std::fmt;

use tokio::sync::mpsc;
use uuid::Uuid;

use super::{ChatMessage, DeliveryError};

/// Receiving half of a subscriber, held by the connection.
pub type SubscriberInbox = mpsc::UnboundedReceiver<ChatMessage>;

/// Identity of a subscriber handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(Uuid);

impl SubscriberId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for SubscriberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Addressable delivery target.
///
/// Clones share the same id and the same inbox. Equality is handle equality
/// (by id), never by channel state.
#[derive(Debug, Clone)]
pub struct Subscriber {
    id: SubscriberId,
    outbox: mpsc::UnboundedSender<ChatMessage>,
}

impl Subscriber {
    /// Create a new subscriber handle together with its inbox.
    pub fn channel() -> (Self, SubscriberInbox) {
        let (outbox, inbox) = mpsc::unbounded_channel();
        let subscriber = Self {
            id: SubscriberId::generate(),
            outbox,
        };
        (subscriber, inbox)
    }

    pub fn id(&self) -> SubscriberId {
        self.id
    }

    /// Push a message to the subscriber without waiting.
    ///
    /// Fails only when the inbox has been dropped.
    pub fn deliver(&self, message: ChatMessage) -> Result<(), DeliveryError> {
        self.outbox
            .send(message)
            .map_err(|_| DeliveryError::Closed(self.id))
    }

    pub fn is_closed(&self) -> bool {
        self.outbox.is_closed()
    }
}

impl PartialEq for Subscriber {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Subscriber {}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_deliver_reaches_inbox() {
        // テスト項目: deliver したメッセージが inbox に届く
        // given (前提条件):
        let (subscriber, mut inbox) = Subscriber::channel();

        // when (操作):
        let result = subscriber.deliver(ChatMessage::new("alice", "hi"));

        // then (期待する結果):
        assert!(result.is_ok());
        assert_eq!(inbox.recv().await, Some(ChatMessage::new("alice", "hi")));
    }

    #[test]
    fn test_deliver_to_dropped_inbox_fails() {
        // テスト項目: inbox が破棄された subscriber への deliver は Closed を返す
        // given (前提条件):
        let (subscriber, inbox) = Subscriber::channel();
        drop(inbox);

        // when (操作):
        let result = subscriber.deliver(ChatMessage::new("alice", "hi"));

        // then (期待する結果):
        assert_eq!(result, Err(DeliveryError::Closed(subscriber.id())));
        assert!(subscriber.is_closed());
    }

    #[test]
    fn test_equality_is_by_handle() {
        // テスト項目: clone は同一 subscriber、別々に作ったものは別 subscriber
        // given (前提条件):
        let (a, _inbox_a) = Subscriber::channel();
        let (b, _inbox_b) = Subscriber::channel();

        // then (期待する結果):
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
    }
}
