//! Server errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    /// Failed to bind the listener
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// I/O error while serving
    #[error("Server I/O error: {0}")]
    Io(#[from] std::io::Error),
}
