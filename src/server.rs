/* src/server.rs */

use axum::{Router, http::header, response::IntoResponse};
use std::net::SocketAddr;
use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::error::Result;
use crate::middleware::{ClientAddr, ClientAddrLayer};

/// Build the application router.
///
/// There is exactly one leaf resource: every path and method resolves to the
/// client-address handler.
pub fn app() -> Router {
    Router::new()
        .fallback(client_addr_handler)
        .layer(ClientAddrLayer::default())
}

/// Write the resolved client address as a plain-text line.
///
/// `Content-Type` is set to `text/plain` explicitly; the framework's string
/// responder would append a charset parameter.
async fn client_addr_handler(client_addr: ClientAddr) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain")],
        format!("{}\r\n", client_addr.addr()),
    )
}

/// Bind the listener and serve requests until the process is terminated.
///
/// The listener is constructed here and owned by the serving loop; a failure
/// to bind propagates out as a startup fault.
pub async fn serve(config: ServerConfig) -> Result<()> {
    let listener = TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "listening");

    axum::serve(
        listener,
        app().into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
