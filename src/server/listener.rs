// ────────────────────────────────
// src/server/listener.rs
// Encapsulates low‑level socket/bind/listen so the receive loop only
// ever sees a ready listener.
// ────────────────────────────────
use tokio::net::{TcpListener, TcpSocket};

use crate::config::{ServerConfig, MAX_PENDING};
use crate::server::error::{Result, ServerError};

/// Create an IPv4 stream socket, bind it to the wildcard address on the
/// configured port, and put it into listening mode.
///
/// The socket is an owned value at every step, so it is closed on each
/// failure path as well as on drop of the returned listener.
pub async fn bind_tcp(config: &ServerConfig) -> Result<TcpListener> {
    let socket = TcpSocket::new_v4().map_err(ServerError::SocketCreation)?;

    socket
        .bind(config.listen_addr())
        .map_err(|e| ServerError::Bind(config.port, e))?;

    socket.listen(MAX_PENDING).map_err(ServerError::Listen)
}
