//! Errors raised while building a [`crate::processing::Range`].

use thiserror::Error;

/// Construction failures. Iteration itself never fails.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeError {
    /// Not `a.b.c.d/n`, or the address is not the base of its own block.
    #[error("Invalid cidr")]
    InvalidCidr,
    /// Sub-block prefix shorter than the network prefix, or longer than 32.
    #[error("Invalid block size")]
    InvalidBlockSize,
}
