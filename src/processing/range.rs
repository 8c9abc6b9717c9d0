//! Cursor over a CIDR block, optionally re-segmented into sub-blocks.
//!
//! ```
//! use cidr_range::processing::Range;
//!
//! let mut range = Range::with_block_size("127.0.0.0/23", 25).unwrap();
//! let mut seen = vec![range.current_address_string()];
//! while range.advance() {
//!     seen.push(range.current_address_string());
//! }
//! assert_eq!(seen, ["127.0.0.0", "127.0.0.128", "127.0.1.0", "127.0.1.128"]);
//! ```

use crate::models::{block_size, to_address, Cidr, RangeError, MAX_LENGTH};
use std::net::Ipv4Addr;

/// A stateful cursor stepping one sub-block at a time through a network.
///
/// Bounds are computed once at construction as `u64`, so the exclusive
/// ceiling of `0.0.0.0/0` (2^32) does not wrap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Range {
    network: Cidr,
    block_len: u8,
    block_size: u64,
    base: u64,
    ceiling: u64,
    current: u32,
}

impl Range {
    /// Range over every single address of `cidr`, i.e. sub-blocks of `/32`.
    pub fn new(cidr: &str) -> Result<Range, RangeError> {
        let network = Cidr::new(cidr)?;
        Ok(Range::from_network(network, MAX_LENGTH))
    }

    /// Range over `cidr` stepping by blocks of prefix length `block_len`.
    pub fn with_block_size(cidr: &str, block_len: u8) -> Result<Range, RangeError> {
        let network = Cidr::new(cidr)?;
        if block_len < network.mask() || block_len > MAX_LENGTH {
            log::debug!("Range::with_block_size() /{block_len} does not fit in {network}");
            return Err(RangeError::InvalidBlockSize);
        }
        Ok(Range::from_network(network, block_len))
    }

    fn from_network(network: Cidr, block_len: u8) -> Range {
        let base = network.base();
        let ceiling = network.ceiling();
        log::debug!(
            "Range {network} step /{block_len} base={base:#x} ceiling={ceiling:#x}"
        );
        Range {
            network,
            block_len,
            // block_len is checked against MAX_LENGTH by both constructors
            block_size: block_size(block_len).unwrap_or(1),
            base,
            ceiling,
            current: network.addr().into(),
        }
    }

    /// Move to the next sub-block.
    ///
    /// Returns false and leaves the cursor on the last sub-block once the
    /// network is exhausted; later calls keep returning false.
    pub fn advance(&mut self) -> bool {
        let next = u64::from(self.current) + self.block_size;
        match u32::try_from(next) {
            Ok(next_addr) if next < self.ceiling => {
                log::trace!("advance() -> {}", to_address(next_addr));
                self.current = next_addr;
                true
            }
            _ => false,
        }
    }

    /// True when [`Range::advance`] would return false.
    pub fn is_last(&self) -> bool {
        u64::from(self.current) + self.block_size >= self.ceiling
    }

    /// Put the cursor back on the first sub-block.
    pub fn reset(&mut self) {
        self.current = self.network.addr().into();
    }

    /// Start address of the current sub-block.
    pub fn current_address(&self) -> Ipv4Addr {
        to_address(self.current)
    }

    /// Current sub-block as a CIDR.
    pub fn current_block(&self) -> Cidr {
        Cidr::from_aligned(self.current_address(), self.block_len)
    }

    /// Dotted-quad rendering of the current sub-block start, e.g. `"44.44.1.0"`.
    pub fn current_address_string(&self) -> String {
        self.current_address().to_string()
    }

    /// The current sub-block with its prefix, e.g. `"44.44.1.0/24"`.
    pub fn current_address_with_prefix_string(&self) -> String {
        self.current_block().to_string()
    }

    /// The network this range was built from.
    pub fn network(&self) -> Cidr {
        self.network
    }

    /// Prefix length of each step.
    pub fn block_prefix_len(&self) -> u8 {
        self.block_len
    }

    /// Total number of sub-blocks, regardless of cursor position.
    pub fn block_count(&self) -> u64 {
        (self.ceiling - self.base) / self.block_size
    }

    /// Restartable sequence of every sub-block, in cursor order.
    pub fn sub_blocks(&self) -> SubBlocks {
        SubBlocks {
            next: self.base,
            ceiling: self.ceiling,
            step: self.block_size,
            mask: self.block_len,
        }
    }
}

impl std::fmt::Display for Range {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.current_address())
    }
}

impl<'a> IntoIterator for &'a Range {
    type Item = Cidr;
    type IntoIter = SubBlocks;

    fn into_iter(self) -> SubBlocks {
        self.sub_blocks()
    }
}

/// Iterator over the sub-blocks of a [`Range`], independent of its cursor.
#[derive(Debug, Clone)]
pub struct SubBlocks {
    next: u64,
    ceiling: u64,
    step: u64,
    mask: u8,
}

impl Iterator for SubBlocks {
    type Item = Cidr;

    fn next(&mut self) -> Option<Cidr> {
        if self.next >= self.ceiling {
            return None;
        }
        let addr = u32::try_from(self.next).ok()?;
        self.next += self.step;
        Some(Cidr::from_aligned(to_address(addr), self.mask))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.ceiling.saturating_sub(self.next) / self.step;
        match usize::try_from(remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

// a /0 network stepped by /32 has 2^32 blocks, more than a 32-bit usize holds
#[cfg(target_pointer_width = "64")]
impl ExactSizeIterator for SubBlocks {}

impl std::iter::FusedIterator for SubBlocks {}
