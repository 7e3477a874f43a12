/* src/config.rs */

use std::net::SocketAddr;

use crate::error::{GetIpError, Result};

/// Port the listener binds to when no override is present.
pub const DEFAULT_PORT: u16 = 8080;

/// Environment variable overriding the full listen address (`host:port`).
pub const LISTEN_ADDR_ENV: &str = "GETIP_LISTEN";

/// Environment variable overriding the listen port only.
pub const LISTEN_PORT_ENV: &str = "GETIP_PORT";

/// Runtime configuration for the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    /// Socket address the listener binds to.
    pub listen_addr: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)),
        }
    }
}

impl ServerConfig {
    /// Build a configuration from the environment, falling back to defaults.
    ///
    /// `GETIP_LISTEN` replaces the whole listen address; `GETIP_PORT`
    /// replaces the port alone and is applied after it. Malformed values are
    /// fatal to startup.
    pub fn from_env() -> Result<Self> {
        let listen = std::env::var(LISTEN_ADDR_ENV).ok();
        let port = std::env::var(LISTEN_PORT_ENV).ok();
        Self::from_overrides(listen.as_deref(), port.as_deref())
    }

    fn from_overrides(listen: Option<&str>, port: Option<&str>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(value) = listen {
            config.listen_addr =
                value
                    .parse()
                    .map_err(|source| GetIpError::InvalidListenAddr {
                        value: value.to_string(),
                        source,
                    })?;
        }

        if let Some(value) = port {
            let port = value
                .parse()
                .map_err(|source| GetIpError::InvalidListenPort {
                    value: value.to_string(),
                    source,
                })?;
            config.listen_addr.set_port(port);
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_listen_addr() {
        let config = ServerConfig::default();
        assert_eq!(config.listen_addr, "0.0.0.0:8080".parse().unwrap());
    }

    #[test]
    fn test_listen_override() {
        let config = ServerConfig::from_overrides(Some("127.0.0.1:9000"), None).unwrap();
        assert_eq!(config.listen_addr, "127.0.0.1:9000".parse().unwrap());
    }

    #[test]
    fn test_port_override() {
        let config = ServerConfig::from_overrides(None, Some("3000")).unwrap();
        assert_eq!(config.listen_addr, "0.0.0.0:3000".parse().unwrap());
    }

    #[test]
    fn test_port_override_applies_after_listen() {
        let config = ServerConfig::from_overrides(Some("127.0.0.1:9000"), Some("3000")).unwrap();
        assert_eq!(config.listen_addr, "127.0.0.1:3000".parse().unwrap());
    }

    #[test]
    fn test_invalid_listen_addr() {
        let err = ServerConfig::from_overrides(Some("not-an-addr"), None).unwrap_err();
        assert!(matches!(err, GetIpError::InvalidListenAddr { .. }));
    }

    #[test]
    fn test_invalid_port() {
        let err = ServerConfig::from_overrides(None, Some("eighty")).unwrap_err();
        assert!(matches!(err, GetIpError::InvalidListenPort { .. }));
    }
}
