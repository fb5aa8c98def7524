//! Domain errors.

use thiserror::Error;

use super::SubscriberId;

/// Failure to hand a message to a subscriber.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeliveryError {
    /// The subscriber's inbox has been dropped (the connection is gone)
    #[error("Subscriber '{0}' is closed")]
    Closed(SubscriberId),
}

/// Value object validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueObjectError {
    #[error("Sender name must not be empty")]
    EmptySender,

    #[error("Sender name is too long: {actual} characters (max {max})")]
    SenderTooLong { actual: usize, max: usize },

    #[error("Sender name must not contain control characters")]
    InvalidSenderCharacter,

    #[error("Message content must not be empty")]
    EmptyContent,

    #[error("Message content is too long: {actual} characters (max {max})")]
    ContentTooLong { actual: usize, max: usize },
}
