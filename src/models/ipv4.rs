//! IPv4 address and CIDR notation utilities.
//!
//! Provides [`Ipv4`] for representing a CIDR block as published by a provider,
//! along with the mask arithmetic used for containment checks.

use std::error::Error;
use std::net::Ipv4Addr;

/// Maximum length for an IPv4 prefix (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use aws_ip_lookup::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32, Box<dyn Error>> {
    if len > MAX_LENGTH {
        Err("Network length is too long".into())
    } else {
        let right_len = MAX_LENGTH - len;
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> right_len) << right_len;

        Ok(mask as u32)
    }
}

/// Prefix length of a contiguous netmask (`255.255.0.0`), `None` otherwise.
fn netmask_prefix(mask: u32) -> Option<u8> {
    let ones = mask.leading_ones();
    if ones + mask.trailing_zeros() == 32 {
        Some(ones as u8)
    } else {
        None
    }
}

/// Read the part after `/`: a decimal prefix length, a netmask or a hostmask.
///
/// # Examples
/// ```
/// use aws_ip_lookup::models::parse_prefix_len;
/// assert_eq!(parse_prefix_len("24").unwrap(), 24);
/// assert_eq!(parse_prefix_len("255.255.255.0").unwrap(), 24);
/// assert_eq!(parse_prefix_len("0.0.0.255").unwrap(), 24);
/// ```
pub fn parse_prefix_len(mask: &str) -> Result<u8, Box<dyn Error>> {
    if !mask.is_empty() && mask.bytes().all(|b| b.is_ascii_digit()) {
        let len: u8 = mask
            .parse()
            .map_err(|_| format!("Invalid prefix length {mask}"))?;
        if len > MAX_LENGTH {
            return Err("Network length is too long".into());
        }
        return Ok(len);
    }

    let bits = u32::from(
        mask.parse::<Ipv4Addr>()
            .map_err(|_| format!("Invalid prefix length {mask}"))?,
    );
    // netmask first, so 0.0.0.0 and 255.255.255.255 read as /0 and /32
    netmask_prefix(bits)
        .or_else(|| netmask_prefix(!bits))
        .ok_or_else(|| format!("Invalid netmask {mask}").into())
}

/// IPv4 CIDR block.
///
/// Parsing is non-strict: host bits beyond the prefix length are kept in `addr`
/// but ignored by [`Ipv4::contains`], so `52.95.110.7/24` covers the same
/// addresses as `52.95.110.0/24`.
#[derive(Eq, Debug, Copy, Clone, Hash, PartialEq)]
pub struct Ipv4 {
    /// The address as written in the source.
    pub addr: Ipv4Addr,
    /// The prefix length (0-32).
    pub mask: u8,
}

impl Ipv4 {
    /// Create a new [`Ipv4`] from a CIDR string (e.g., "10.0.0.0/24").
    ///
    /// The prefix may also be given as a netmask (`/255.255.255.0`) or a
    /// hostmask (`/0.0.0.255`). A bare address is read as a `/32` block.
    pub fn new(addr_cidr: &str) -> Result<Ipv4, Box<dyn Error>> {
        let addr_cidr = addr_cidr.trim();
        let (addr, mask) = match addr_cidr.split_once('/') {
            Some((addr, mask)) => (addr, parse_prefix_len(mask)?),
            None => (addr_cidr, MAX_LENGTH),
        };
        let addr: Ipv4Addr = addr.parse().map_err(|_| format!("Invalid address {addr}"))?;
        Ok(Ipv4 { addr, mask })
    }

    /// True if `ip` falls inside this block.
    pub fn contains(&self, ip: Ipv4Addr) -> bool {
        // mask <= 32 is enforced by the constructor, the fallback is unreachable
        let mask = get_cidr_mask(self.mask).unwrap_or(u32::MAX);
        (u32::from(ip) & mask) == (u32::from(self.addr) & mask)
    }
}

impl std::fmt::Display for Ipv4 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.mask)
    }
}
