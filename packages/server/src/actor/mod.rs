//! Serialized command processors.
//!
//! Each component runs as its own tokio task and owns its state outright.
//! Callers never touch that state; they hold a cloneable handle that
//! enqueues commands into the component's mailbox, and the task applies them
//! one at a time in arrival order.
//!
//! - [`HistoryStore`]: append-only message log, replays it on request.
//! - [`RoomBroadcaster`]: live membership and fan-out; forwards every
//!   published message to the history store.
//!
//! The two mailboxes are drained independently, so a history replay for a
//! new subscriber and a concurrent live broadcast are not ordered relative to
//! each other.

mod error;
mod history_store;
mod room_broadcaster;

pub use error::ActorError;
pub use history_store::{HistoryCommand, HistoryHandle, HistoryStore};
pub use room_broadcaster::{RoomBroadcaster, RoomCommand, RoomHandle};
