//! Domain entities.

/// A single chat message.
///
/// Immutable once created and compared by value: two messages with the same
/// sender and content are equal, and duplicates are never collapsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    sender: String,
    content: String,
}

impl ChatMessage {
    pub fn new(sender: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            sender: sender.into(),
            content: content.into(),
        }
    }

    pub fn sender(&self) -> &str {
        &self.sender
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Split the message into `(sender, content)`.
    pub fn into_parts(self) -> (String, String) {
        (self.sender, self.content)
    }
}
