/* src/resolver.rs */

use std::collections::HashMap;

/// Type alias for header maps. Can be any map-like structure with string keys and values.
pub type HeaderMap = HashMap<String, String>;

/// Header consulted for the forwarded client chain by default.
pub const FORWARDED_FOR_HEADER: &str = "x-forwarded-for";

/// Configuration for client address resolution behavior.
#[derive(Debug, Clone)]
pub struct AddrResolver {
    /// Header to check for the forwarded client chain, matched lowercase.
    pub header: String,
}

impl Default for AddrResolver {
    fn default() -> Self {
        Self {
            header: FORWARDED_FOR_HEADER.to_string(),
        }
    }
}

impl AddrResolver {
    /// Create a new resolver with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the header to check for the forwarded client chain.
    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = header.into().to_lowercase();
        self
    }

    /// Resolve the apparent client address for one request.
    ///
    /// When the forwarded header is present, the first comma-separated entry
    /// of its value is returned verbatim: no whitespace trimming, no address
    /// validation, an empty value resolves to an empty address. When the
    /// header is absent, the transport-level peer address is used instead.
    pub fn resolve(&self, headers: &HeaderMap, peer_addr: Option<&str>) -> Option<String> {
        if let Some(addr) = self.resolve_from_headers(headers) {
            return Some(addr);
        }

        peer_addr.map(str::to_string)
    }

    /// Resolve from the forwarded header only.
    fn resolve_from_headers(&self, headers: &HeaderMap) -> Option<String> {
        let value = headers.get(&self.header)?;
        Some(first_entry(value).to_string())
    }
}

/// First entry of a comma-separated forwarded chain, verbatim.
fn first_entry(value: &str) -> &str {
    match value.split_once(',') {
        Some((first, _)) => first,
        None => value,
    }
}

/// Convenience function resolving a client address with the default configuration.
///
/// # Arguments
///
/// * `headers` - Map of HTTP headers with lowercase keys
/// * `peer_addr` - Remote socket address of the underlying connection
///
/// # Examples
///
/// ```rust
/// use getip::{HeaderMap, resolve_client_addr};
/// use std::collections::HashMap;
///
/// let mut headers = HashMap::new();
/// headers.insert("x-forwarded-for".to_string(), "1.2.3.4, 5.6.7.8".to_string());
///
/// assert_eq!(resolve_client_addr(&headers, "10.0.0.1"), "1.2.3.4");
/// assert_eq!(resolve_client_addr(&HashMap::new(), "10.0.0.1"), "10.0.0.1");
/// ```
pub fn resolve_client_addr(headers: &HeaderMap, peer_addr: &str) -> String {
    match AddrResolver::default().resolve(headers, Some(peer_addr)) {
        Some(addr) => addr,
        None => peer_addr.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HashMap::new();
        headers.insert(FORWARDED_FOR_HEADER.to_string(), value.to_string());
        headers
    }

    #[test]
    fn test_fallback_to_peer_addr() {
        let headers = HashMap::new();
        assert_eq!(resolve_client_addr(&headers, "10.0.0.1"), "10.0.0.1");
    }

    #[test]
    fn test_single_forwarded_entry() {
        let headers = headers_with("1.2.3.4");
        assert_eq!(resolve_client_addr(&headers, "10.0.0.1"), "1.2.3.4");
    }

    #[test]
    fn test_first_entry_of_chain() {
        let headers = headers_with("1.2.3.4, 5.6.7.8");
        assert_eq!(resolve_client_addr(&headers, "10.0.0.1"), "1.2.3.4");
    }

    #[test]
    fn test_entries_are_not_trimmed() {
        let headers = headers_with(" 1.2.3.4 ,5.6.7.8");
        assert_eq!(resolve_client_addr(&headers, "10.0.0.1"), " 1.2.3.4 ");
    }

    #[test]
    fn test_empty_header_resolves_empty() {
        let headers = headers_with("");
        assert_eq!(resolve_client_addr(&headers, "10.0.0.1"), "");
    }

    #[test]
    fn test_garbage_passed_through() {
        let headers = headers_with("not-an-ip");
        assert_eq!(resolve_client_addr(&headers, "10.0.0.1"), "not-an-ip");
    }

    #[test]
    fn test_custom_header() {
        let mut headers = HashMap::new();
        headers.insert("x-real-ip".to_string(), "203.0.113.9".to_string());

        let resolver = AddrResolver::new().with_header("X-Real-IP");
        let addr = resolver.resolve(&headers, Some("10.0.0.1"));
        assert_eq!(addr, Some("203.0.113.9".to_string()));
    }

    #[test]
    fn test_no_header_no_peer() {
        let resolver = AddrResolver::default();
        assert_eq!(resolver.resolve(&HashMap::new(), None), None);
    }
}
