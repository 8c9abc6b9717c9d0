//! Output formatting for sub-block listings.
//!
//! This module handles formatting a [`crate::processing::Range`] for display:
//! - [`row`] - one [`BlockRow`] per sub-block
//! - [`csv`] - CSV output formatting
//! - [`json`] - JSON output formatting
//! - [`terminal`] - Terminal output with colors

mod csv;
mod json;
mod row;
mod terminal;

pub use csv::{csv_header, csv_row, write_csv};
pub use json::write_json;
pub use row::{block_rows, BlockRow};
pub use terminal::{format_block, format_field, write_blocks};
