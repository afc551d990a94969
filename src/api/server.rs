//! HTTP listener setup and serve loop.

use std::future::Future;

use tokio::net::TcpListener;
use tracing::info;

use super::handlers::AppState;
use super::routes::create_router;
use crate::config::Config;
use crate::error::Result;

/// Bind the listener on the configured address.
pub async fn bind_listener(config: &Config) -> Result<TcpListener> {
    let addr = config.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "HTTP server listening");
    Ok(listener)
}

/// Serve the API on `listener` until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, state: AppState, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("HTTP server stopped");
    Ok(())
}
