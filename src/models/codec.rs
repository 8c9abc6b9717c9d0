//! Conversion between dotted-quad IPv4 addresses and their `u32` encoding.
//!
//! The four octets are read in network order as a big-endian integer, so
//! `10.0.0.1` is `0x0A000001`.

use super::RangeError;
use std::net::Ipv4Addr;

/// Encode an address as a big-endian `u32`.
///
/// # Examples
/// ```
/// use cidr_range::models::to_integer;
/// use std::net::Ipv4Addr;
/// assert_eq!(to_integer(Ipv4Addr::new(127, 0, 0, 1)), 0x7F000001);
/// ```
pub fn to_integer(addr: Ipv4Addr) -> u32 {
    u32::from_be_bytes(addr.octets())
}

/// Decode a `u32`, most significant byte first.
///
/// # Examples
/// ```
/// use cidr_range::models::to_address;
/// assert_eq!(to_address(0x2C2C0100).to_string(), "44.44.1.0");
/// ```
pub fn to_address(value: u32) -> Ipv4Addr {
    let [a, b, c, d] = value.to_be_bytes();
    Ipv4Addr::new(a, b, c, d)
}

/// Encode a raw four byte sequence.
pub fn from_octets(octets: [u8; 4]) -> u32 {
    to_integer(Ipv4Addr::from(octets))
}

/// Parse a dotted-quad string and encode it.
pub fn parse_to_integer(addr: &str) -> Result<u32, RangeError> {
    let addr: Ipv4Addr = addr.trim().parse().map_err(|_| {
        log::debug!("parse_to_integer() rejected address {addr:?}");
        RangeError::InvalidCidr
    })?;
    Ok(to_integer(addr))
}
