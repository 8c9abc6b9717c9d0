//! Terminal output utilities.
//!
//! Provides formatting helpers for terminal output.

use crate::models::Cidr;
use colored::Colorize;
use std::io::{self, Write};

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
///
/// # Returns
/// A quoted, right-aligned string
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let quoted = format!("\"{}\"", value.to_string());

    if quoted.len() >= width {
        quoted
    } else {
        format!("{quoted:>width$}")
    }
}

/// Render one sub-block for a plain listing.
///
/// With `with_prefix` the `/len` suffix is highlighted.
pub fn format_block(block: &Cidr, with_prefix: bool) -> String {
    if with_prefix {
        format!("{}{}", block.addr(), format!("/{}", block.mask()).cyan())
    } else {
        block.addr().to_string()
    }
}

/// Write one [`format_block`] line per sub-block as they are produced.
pub fn write_blocks<W: Write>(
    out: &mut W,
    blocks: impl IntoIterator<Item = Cidr>,
    with_prefix: bool,
) -> io::Result<()> {
    for block in blocks {
        writeln!(out, "{}", format_block(&block, with_prefix))?;
    }
    Ok(())
}
