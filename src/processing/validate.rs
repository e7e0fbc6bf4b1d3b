//! Dotted-decimal IPv4 validation.

use std::net::Ipv4Addr;

/// Parse a candidate as an IPv4 address, surrounding whitespace ignored.
pub fn parse_ip(ip: &str) -> Option<Ipv4Addr> {
    ip.trim().parse().ok()
}

/// True if the candidate is a valid dotted-decimal IPv4 address.
pub fn is_valid_ip(ip: &str) -> bool {
    parse_ip(ip).is_some()
}
