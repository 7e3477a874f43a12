/* src/error.rs */

use thiserror::Error;

/// Result type alias for operations that may fail with `GetIpError`.
pub type Result<T> = std::result::Result<T, GetIpError>;

/// Errors that can occur while configuring or running the service.
///
/// Request handling itself never fails: a malformed forwarded header is
/// passed through verbatim rather than rejected.
#[derive(Error, Debug)]
pub enum GetIpError {
    /// Listen address could not be parsed as `host:port`.
    #[error("invalid listen address `{value}`: {source}")]
    InvalidListenAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },

    /// Listen port could not be parsed as a port number.
    #[error("invalid listen port `{value}`: {source}")]
    InvalidListenPort {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// Failure to bind the listening socket or serve connections.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
