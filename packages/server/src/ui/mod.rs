//! Transport adapter: Axum HTTP + WebSocket in front of the chat core.

mod error;
mod handler;
mod server;
mod signal;
pub mod state;

pub use error::ServerError;
pub use server::Server;
