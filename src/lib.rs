/* src/lib.rs */
//! # getip
//!
//! A minimal HTTP service that replies with the requesting client's IP
//! address, preferring the `X-Forwarded-For` header with a fallback to the
//! remote socket address.
//!
//! ## Features
//!
//! - Resolve the apparent client address from the forwarded-for chain
//! - Fallback to the remote socket address
//! - Axum middleware and extractor integration via the `axum` feature
//! - The ready-to-run HTTP service via the `server` feature (default)
//!
//! ## Examples
//!
//! ### Basic Usage
//!
//! ```rust
//! use getip::{HeaderMap, resolve_client_addr};
//! use std::collections::HashMap;
//!
//! let mut headers = HashMap::new();
//! headers.insert("x-forwarded-for".to_string(), "1.2.3.4, 5.6.7.8".to_string());
//!
//! // First entry of the chain, verbatim.
//! assert_eq!(resolve_client_addr(&headers, "10.0.0.1"), "1.2.3.4");
//!
//! // No header: the peer address of the connection.
//! assert_eq!(resolve_client_addr(&HashMap::new(), "10.0.0.1"), "10.0.0.1");
//! ```

pub mod error;
pub mod resolver;

#[cfg(feature = "axum")]
pub mod middleware;

#[cfg(feature = "server")]
pub mod config;
#[cfg(feature = "server")]
pub mod server;

pub use error::{GetIpError, Result};
pub use resolver::{AddrResolver, FORWARDED_FOR_HEADER, HeaderMap, resolve_client_addr};

#[cfg(feature = "axum")]
pub use middleware::{ClientAddr, ClientAddrLayer, ClientAddrService};

#[cfg(feature = "server")]
pub use config::ServerConfig;
#[cfg(feature = "server")]
pub use server::{app, serve};
