/* demos/resolve.rs */

use getip::{AddrResolver, resolve_client_addr};
use std::collections::HashMap;

fn main() {
    println!("=== Client Address Resolution Examples ===\n");

    example_1_forwarded_chain();
    example_2_peer_fallback();
    example_3_custom_header();

    println!("=== All examples completed! ===");
}

fn example_1_forwarded_chain() {
    println!("Example 1: X-Forwarded-For chain");

    let mut headers = HashMap::new();
    headers.insert(
        "x-forwarded-for".to_string(),
        "203.0.113.1, 192.168.1.10, 10.0.0.5".to_string(),
    );

    let addr = resolve_client_addr(&headers, "10.0.0.1");
    println!("Resolved address (first in chain): {}", addr);
    println!();
}

fn example_2_peer_fallback() {
    println!("Example 2: Fallback to peer address");

    let headers = HashMap::new(); // Empty headers
    let peer_addr = "192.0.2.123";

    let addr = resolve_client_addr(&headers, peer_addr);
    println!("Resolved address (peer fallback): {}", addr);
    println!();
}

fn example_3_custom_header() {
    println!("Example 3: Custom forwarded header");

    let mut headers = HashMap::new();
    headers.insert("x-real-ip".to_string(), "203.0.113.200".to_string());
    headers.insert("x-forwarded-for".to_string(), "198.51.100.7".to_string());

    let resolver = AddrResolver::new().with_header("X-Real-IP");
    match resolver.resolve(&headers, Some("10.0.0.1")) {
        Some(addr) => println!("Custom resolver result: {}", addr),
        None => println!("No address resolved"),
    }

    let addr = resolve_client_addr(&headers, "10.0.0.1");
    println!("Default resolver result: {}", addr);
    println!();
}
