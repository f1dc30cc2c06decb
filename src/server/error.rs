// src/server/error.rs
use thiserror::Error;

/// Failures of the socket lifecycle. Every variant is fatal to the
/// current run; the listening socket is released by the caller during
/// unwind. Each message names the failed operation and embeds the OS
/// error text, so the one reported line identifies its origin.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to create socket: {0}")]
    SocketCreation(std::io::Error),

    #[error("failed to bind port {0}: {1}")]
    Bind(u16, std::io::Error),

    #[error("failed to listen: {0}")]
    Listen(std::io::Error),

    #[error("failed to accept connection: {0}")]
    Accept(std::io::Error),

    #[error("failed to receive message: {0}")]
    Receive(std::io::Error),
}

/// Result type for the socket lifecycle.
pub type Result<T> = std::result::Result<T, ServerError>;
