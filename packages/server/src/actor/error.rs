//! Actor errors.

use thiserror::Error;

/// Errors surfaced by request/reply queries to a component.
///
/// Fire-and-forget commands never return this; a stopped component simply
/// drops them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActorError {
    /// The component's processing loop has exited
    #[error("{0} is not running")]
    Stopped(&'static str),
}
