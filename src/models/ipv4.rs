//! IPv4 CIDR notation and block arithmetic.
//!
//! Provides the [`Cidr`] value type along with the mask, alignment and
//! block-size helpers used by [`crate::processing::Range`]. Block sizes and
//! ceilings are `u64` so that a `/0` network (2^32 addresses) is representable.

use super::codec::{to_address, to_integer};
use super::RangeError;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Maximum length for an IPv4 prefix (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use cidr_range::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32, RangeError> {
    if len > MAX_LENGTH {
        Err(RangeError::InvalidCidr)
    } else {
        let right_len = MAX_LENGTH - len;
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> right_len) << right_len;

        Ok(mask as u32)
    }
}

/// Number of addresses in a block of the given prefix length.
///
/// # Examples
/// ```
/// use cidr_range::models::block_size;
/// assert_eq!(block_size(24).unwrap(), 256);
/// assert_eq!(block_size(0).unwrap(), 1 << 32);
/// ```
pub fn block_size(len: u8) -> Result<u64, RangeError> {
    if len > MAX_LENGTH {
        Err(RangeError::InvalidBlockSize)
    } else {
        Ok(1u64 << (MAX_LENGTH - len))
    }
}

/// Get the network address for a given IP and prefix length.
pub fn cut_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, RangeError> {
    let mask = get_cidr_mask(len)?;
    Ok(to_address(to_integer(addr) & mask))
}

/// True when the low `32 - len` bits of `addr` are all zero.
pub fn is_aligned(addr: Ipv4Addr, len: u8) -> bool {
    matches!(cut_addr(addr, len), Ok(base) if base == addr)
}

/// Calculate the broadcast (last) address for a given IP and prefix length.
pub fn broadcast_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, RangeError> {
    let mask = get_cidr_mask(len)?;
    let network_bits = to_integer(addr) & mask;
    Ok(to_address(network_bits | !mask))
}

/// A block-aligned IPv4 network in CIDR notation.
///
/// Fields are private so every value has `mask <= 32` and an aligned `addr`.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Cidr {
    addr: Ipv4Addr,
    mask: u8,
}

impl Serialize for Cidr {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Cidr {
    fn deserialize<D>(deserializer: D) -> Result<Cidr, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Cidr::new(&s).map_err(|e| de::Error::custom(format!("{e}: {s}")))
    }
}

impl Cidr {
    /// Parse a CIDR string (e.g., "10.0.0.0/24").
    ///
    /// The address must be the base of its own block, so `127.0.0.1/31` is
    /// rejected rather than rounded down.
    pub fn new(addr_cidr: &str) -> Result<Cidr, RangeError> {
        let Some((addr, mask)) = addr_cidr.trim().split_once('/') else {
            log::debug!("Cidr::new() missing '/' in {addr_cidr:?}");
            return Err(RangeError::InvalidCidr);
        };
        let addr: Ipv4Addr = addr.parse().map_err(|_| RangeError::InvalidCidr)?;
        // u8::from_str accepts a leading '+', which is not CIDR syntax
        if mask.is_empty() || !mask.bytes().all(|b| b.is_ascii_digit()) {
            return Err(RangeError::InvalidCidr);
        }
        let mask: u8 = mask.parse().map_err(|_| RangeError::InvalidCidr)?;
        Cidr::from_parts(addr, mask)
    }

    /// Build from an address and prefix length, with the same checks as [`Cidr::new`].
    pub fn from_parts(addr: Ipv4Addr, mask: u8) -> Result<Cidr, RangeError> {
        if mask > MAX_LENGTH {
            return Err(RangeError::InvalidCidr);
        }
        if !is_aligned(addr, mask) {
            log::debug!("Cidr::from_parts() {addr}/{mask} is not block aligned");
            return Err(RangeError::InvalidCidr);
        }
        Ok(Cidr { addr, mask })
    }

    /// Caller guarantees `mask <= 32` and that `addr` is aligned to it.
    pub(crate) fn from_aligned(addr: Ipv4Addr, mask: u8) -> Cidr {
        debug_assert!(mask <= MAX_LENGTH && is_aligned(addr, mask));
        Cidr { addr, mask }
    }

    /// The base address of the block.
    pub fn addr(&self) -> Ipv4Addr {
        self.addr
    }

    /// The prefix length (0-32).
    pub fn mask(&self) -> u8 {
        self.mask
    }

    /// Number of addresses in the block.
    pub fn size(&self) -> u64 {
        1u64 << (MAX_LENGTH - self.mask)
    }

    /// First address of the block as an integer (inclusive).
    pub fn base(&self) -> u64 {
        u64::from(to_integer(self.addr))
    }

    /// First address past the block (exclusive). Reaches 2^32 for blocks
    /// touching the top of the address space.
    pub fn ceiling(&self) -> u64 {
        self.base() + self.size()
    }

    /// Get the lowest (network) address in the block.
    pub fn lo(&self) -> Ipv4Addr {
        self.addr
    }

    /// Get the highest (broadcast) address in the block.
    pub fn hi(&self) -> Ipv4Addr {
        to_address(to_integer(self.addr) | !self.netmask())
    }

    fn netmask(&self) -> u32 {
        // mask <= MAX_LENGTH is guaranteed by construction
        get_cidr_mask(self.mask).unwrap_or(u32::MAX)
    }
}

impl FromStr for Cidr {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Cidr::new(s)
    }
}

impl std::fmt::Display for Cidr {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.mask)
    }
}
