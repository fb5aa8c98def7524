//! Request handlers.

mod http;
mod websocket;

pub use http::{debug_room_state, get_history, health_check};
pub use websocket::websocket_handler;
