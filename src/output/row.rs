//! One printable row per sub-block.

use crate::models::Cidr;
use crate::processing::Range;
use serde::Serialize;
use std::net::Ipv4Addr;

/// A sub-block with its first and last address.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct BlockRow {
    /// The sub-block in CIDR notation.
    pub block: Cidr,
    /// First address (the block base).
    pub first: Ipv4Addr,
    /// Last address (the block broadcast).
    pub last: Ipv4Addr,
    /// Number of addresses in the block.
    pub size: u64,
}

impl From<Cidr> for BlockRow {
    fn from(block: Cidr) -> Self {
        BlockRow {
            block,
            first: block.lo(),
            last: block.hi(),
            size: block.size(),
        }
    }
}

/// Lazily produce rows for the sub-blocks of `range`, capped at `limit` when given.
///
/// Nothing is collected, so a `/0` listing costs one row at a time.
pub fn block_rows(
    range: &Range,
    limit: Option<usize>,
) -> impl Iterator<Item = BlockRow> + Clone {
    let limit = limit.unwrap_or(usize::MAX);
    if (limit as u64) < range.block_count() {
        log::warn!(
            "Listing {limit} of {count} blocks in {network}",
            count = range.block_count(),
            network = range.network()
        );
    }
    range.sub_blocks().take(limit).map(BlockRow::from)
}
