// ────────────────────────────────
// src/server/receiver.rs
// The accept/receive loop: one connection at a time, one read per
// connection, stop on the literal message "terminate".
// ────────────────────────────────
use std::future::Future;
use std::net::SocketAddr;

use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::net::TcpListener;
use tracing::{debug, info};

use crate::config::{ServerConfig, RECV_BUFFER_SIZE};
use crate::server::error::{Result, ServerError};
use crate::server::listener::bind_tcp;

/// The message that shuts the server down.
const TERMINATE: &[u8] = b"terminate";

/// A bound, listening server. Dropping it (or either `serve` variant
/// returning) closes the listening socket.
#[derive(Debug)]
pub struct Server {
    listener: TcpListener,
}

impl Server {
    /// Bind a listener per the config. No connection is accepted yet.
    pub async fn bind(config: &ServerConfig) -> Result<Self> {
        let listener = bind_tcp(config).await?;
        Ok(Self { listener })
    }

    /// The address the listener actually bound. Differs from the
    /// configured address when port 0 was requested.
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Serve until a client sends `terminate` or an accept/receive
    /// failure aborts the run.
    pub async fn serve(self) -> Result<()> {
        self.serve_with_shutdown(std::future::pending::<()>()).await
    }

    /// Same loop, but also resolves (successfully) when `shutdown`
    /// completes. The signal is only consulted while waiting for a
    /// connection, so an in-flight receive always finishes first.
    pub async fn serve_with_shutdown(self, shutdown: impl Future<Output = ()>) -> Result<()> {
        tokio::pin!(shutdown);

        loop {
            let (mut stream, peer) = tokio::select! {
                res = self.listener.accept() => res.map_err(ServerError::Accept)?,
                _ = &mut shutdown => {
                    info!("shutdown requested, closing listener");
                    return Ok(());
                }
            };

            println!("[client: {}]", peer.ip());

            let message = receive_message(&mut stream).await?;
            println!("message: {}", String::from_utf8_lossy(&message));

            if is_terminate(&message) {
                debug!(%peer, "terminate received, leaving the accept loop");
                return Ok(());
            }

            // The stream drops here, closing the connection before the
            // next accept. Anything the client sent beyond the first
            // read stays unread.
        }
    }
}

/// Perform exactly one read of up to [`RECV_BUFFER_SIZE`] bytes.
///
/// A zero-length result means the peer closed the connection without
/// sending data; the caller treats it like any other message.
async fn receive_message<R>(stream: &mut R) -> Result<Vec<u8>>
where
    R: AsyncRead + Unpin,
{
    let mut buf = vec![0u8; RECV_BUFFER_SIZE];
    let n = stream.read(&mut buf).await.map_err(ServerError::Receive)?;
    buf.truncate(n);
    Ok(buf)
}

/// Exact match only: no trimming, no case folding.
fn is_terminate(message: &[u8]) -> bool {
    message == TERMINATE
}
