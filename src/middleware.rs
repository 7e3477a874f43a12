/* src/middleware.rs */

use axum::{
    extract::{ConnectInfo, FromRequestParts, Request},
    http::{HeaderMap, request::Parts},
    response::Response,
};
use futures_util::future::BoxFuture;
use std::{
    convert::Infallible,
    net::SocketAddr,
    task::{Context, Poll},
};
use tower::{Layer, Service};

use crate::resolver::AddrResolver;

/// Extension that holds the resolved client address.
#[derive(Debug, Clone)]
pub struct ClientAddr(pub String);

impl ClientAddr {
    /// Get the resolved address.
    pub fn addr(&self) -> &str {
        &self.0
    }
}

/// Layer for resolving the apparent client address of HTTP requests.
///
/// This layer examines the forwarded-for header, falls back to the peer
/// address of the underlying connection, and stores the result as a request
/// extension that can be accessed by handlers.
///
/// # Examples
///
/// ```rust,no_run
/// use axum::{Router, routing::get};
/// use getip::{ClientAddr, ClientAddrLayer};
///
/// async fn handler(client_addr: ClientAddr) -> String {
///     client_addr.addr().to_string()
/// }
///
/// let app: Router = Router::new()
///     .route("/", get(handler))
///     .layer(ClientAddrLayer::default());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ClientAddrLayer {
    resolver: AddrResolver,
}

impl ClientAddrLayer {
    /// Create a new client address layer with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new client address layer with custom resolver configuration.
    pub fn with_resolver(resolver: AddrResolver) -> Self {
        Self { resolver }
    }
}

impl<S> Layer<S> for ClientAddrLayer {
    type Service = ClientAddrService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        ClientAddrService {
            inner,
            resolver: self.resolver.clone(),
        }
    }
}

/// Service that resolves client addresses.
#[derive(Debug, Clone)]
pub struct ClientAddrService<S> {
    inner: S,
    resolver: AddrResolver,
}

impl<S> Service<Request> for ClientAddrService<S>
where
    S: Service<Request, Response = Response> + Send + 'static,
    S::Future: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = BoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: Request) -> Self::Future {
        let header_map = headers_to_map(req.headers());

        // Peer address from connection info, IP portion only.
        let peer_addr = req
            .extensions()
            .get::<ConnectInfo<SocketAddr>>()
            .map(|connect_info| connect_info.0.ip().to_string());

        if let Some(addr) = self.resolver.resolve(&header_map, peer_addr.as_deref()) {
            req.extensions_mut().insert(ClientAddr(addr));
        }

        let future = self.inner.call(req);
        Box::pin(async move { future.await })
    }
}

/// Convert Axum headers to our internal header map format.
///
/// Header names are lowercased; values that are not valid UTF-8 are decoded
/// lossily so a present header never silently falls back to the peer address.
/// Repeated headers keep the last occurrence.
fn headers_to_map(headers: &HeaderMap) -> std::collections::HashMap<String, String> {
    let mut map = std::collections::HashMap::new();

    for (name, value) in headers.iter() {
        let value_str = String::from_utf8_lossy(value.as_bytes());
        map.insert(name.as_str().to_lowercase(), value_str.into_owned());
    }

    map
}

/// Axum extractor for the resolved client address.
///
/// Reads the extension stored by [`ClientAddrLayer`], falling back to the
/// connection's own address when the layer did not run.
impl<S> FromRequestParts<S> for ClientAddr
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        if let Some(client_addr) = parts.extensions.get::<ClientAddr>() {
            Ok(client_addr.clone())
        } else if let Some(connect_info) = parts.extensions.get::<ConnectInfo<SocketAddr>>() {
            Ok(ClientAddr(connect_info.0.ip().to_string()))
        } else {
            // Default fallback
            Ok(ClientAddr("127.0.0.1".to_string()))
        }
    }
}
