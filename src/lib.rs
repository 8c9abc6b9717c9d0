//! Deterministic enumeration of IPv4 CIDR blocks.
//!
//! A [`Range`] walks a network one sub-block at a time, and the
//! [`models`] codec converts between dotted-quad addresses and `u32`.
//!
//! - [`models`] - address codec, [`Cidr`] and block arithmetic
//! - [`processing`] - the [`Range`] cursor and [`processing::SharedRange`]
//! - [`output`] - plain, CSV and JSON listings
//! - [`cmd`] and [`config`] - command line and logging for the binary

pub mod cmd;
pub mod config;
pub mod models;
pub mod output;
pub mod processing;

pub use models::{to_address, to_integer, Cidr, RangeError};
pub use processing::Range;
