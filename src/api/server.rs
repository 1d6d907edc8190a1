//! HTTP server lifecycle.

use axum::Router;
use std::io;
use tokio::net::TcpListener;
use tracing::info;

/// Serves the router on the given listener until shutdown is requested.
///
/// Shutdown is triggered by `SIGINT` (Ctrl-C); in-flight requests drain
/// before the call returns.
///
/// # Errors
///
/// Returns the underlying I/O error when the server fails to run.
pub async fn serve(listener: TcpListener, router: Router) -> io::Result<()> {
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, "task API listening");
    }
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    wait_for_shutdown(tokio::signal::ctrl_c().await).await;
}

/// Resolves once a shutdown signal has been delivered.
///
/// A failure to install the signal handler must not complete the graceful
/// shutdown future, or the server would exit immediately; the error branch
/// therefore waits forever and the server runs until killed externally.
async fn wait_for_shutdown(signal: io::Result<()>) {
    match signal {
        Ok(()) => info!("shutdown requested"),
        Err(err) => {
            tracing::warn!(error = %err, "failed to install shutdown handler");
            std::future::pending::<()>().await;
        }
    }
}
