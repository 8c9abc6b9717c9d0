//! Address-level building blocks.
//!
//! - [`codec`] - conversion between [`std::net::Ipv4Addr`] and `u32`
//! - [`ipv4`] - [`Cidr`] and block arithmetic
//! - [`error`] - [`RangeError`]

mod codec;
mod error;
mod ipv4;

// Re-export public types
pub use codec::{from_octets, parse_to_integer, to_address, to_integer};
pub use error::RangeError;
pub use ipv4::{
    block_size, broadcast_addr, cut_addr, get_cidr_mask, is_aligned, Cidr, MAX_LENGTH,
};
