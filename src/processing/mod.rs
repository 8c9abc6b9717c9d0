//! Iteration over CIDR blocks.
//!
//! - [`range`] - the [`Range`] cursor and its [`SubBlocks`] sequence
//! - [`shared`] - [`SharedRange`] for handing sub-blocks to several workers

mod range;
mod shared;

// Re-export public types
pub use range::{Range, SubBlocks};
pub use shared::SharedRange;
