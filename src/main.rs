// src/main.rs
use anyhow::Result;
use clap::Parser;
use tokio::signal;
use tracing::info;

use rust_socket_server::config::ServerConfig;
use rust_socket_server::server::Server;

/// A TCP listener that reports each client's message on the console
/// and exits when a client sends "terminate".
#[derive(Parser, Debug)]
#[command(name = "rust-socket-server")]
struct Args {
    /// Port to listen on
    #[arg(value_parser = clap::value_parser!(u16).range(1..))]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("rust_socket_server=debug".parse()?),
        )
        .init();

    let config = ServerConfig::new(args.port);
    let server = Server::bind(&config).await?;
    info!("listening on {}", server.local_addr()?);

    server.serve_with_shutdown(shutdown_signal()).await?;

    info!("server stopped");
    Ok(())
}

// Graceful shutdown handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_a_single_numeric_port() {
        let args = Args::try_parse_from(["rust-socket-server", "9090"]).unwrap();
        assert_eq!(args.port, 9090);
    }

    #[test]
    fn rejects_a_missing_port() {
        assert!(Args::try_parse_from(["rust-socket-server"]).is_err());
    }

    #[test]
    fn rejects_extra_arguments() {
        assert!(Args::try_parse_from(["rust-socket-server", "9090", "9091"]).is_err());
    }

    #[test]
    fn rejects_a_non_numeric_port() {
        assert!(Args::try_parse_from(["rust-socket-server", "http"]).is_err());
    }

    #[test]
    fn rejects_port_zero() {
        assert!(Args::try_parse_from(["rust-socket-server", "0"]).is_err());
    }

    #[test]
    fn rejects_an_out_of_range_port() {
        assert!(Args::try_parse_from(["rust-socket-server", "65536"]).is_err());
    }
}
