//! # Lookup Address Model
//!
//! Addresses travel through the pipeline as plain strings, exactly as the
//! caller typed them (minus surrounding whitespace). This module decides
//! which of those strings are allowed onto the wire.
//!
//! Accepted:
//! * IPv4 dotted-quad literals (e.g., `8.8.8.8`).
//! * IPv6 literals, including IPv4-mapped forms (e.g., `2001:4860:4860::8888`, `::ffff:1.2.3.4`).
//!
//! Rejected: hostnames, CIDR blocks, ranges, zone-scoped IPv6 (`fe80::1%eth0`).

use std::net::IpAddr;

/// Parses a trimmed input into an IP address, if it is a bare literal.
pub fn parse_address(s: &str) -> Option<IpAddr> {
    s.parse::<IpAddr>().ok()
}

/// Returns `true` when `s` is a syntactically valid IPv4 or IPv6 literal.
pub fn is_ip_literal(s: &str) -> bool {
    parse_address(s).is_some()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
