//! CSV output formatting for sub-block listings.

use super::row::BlockRow;
use super::terminal::format_field;
use std::io::{self, Write};

/// CSV header, column widths match [`csv_row`].
pub fn csv_header() -> String {
    format!(
        "{cnt},{block},{first},{last},{size}",
        cnt = format_field("cnt", 8),
        block = format_field("block", 20),
        first = format_field("first", 17),
        last = format_field("last", 17),
        size = format_field("size", 12),
    )
}

/// Format a single CSV row.
pub fn csv_row(cnt: usize, row: &BlockRow) -> String {
    format!(
        "{cnt},{block},{first},{last},{size}",
        cnt = format_field(cnt, 8),
        block = format_field(row.block, 20),
        first = format_field(row.first, 17),
        last = format_field(row.last, 17),
        size = format_field(row.size, 12),
    )
}

/// Write the header and then one line per row as they are produced.
pub fn write_csv<W: Write>(
    out: &mut W,
    rows: impl IntoIterator<Item = BlockRow>,
) -> io::Result<()> {
    log::info!("#Start write_csv()");
    writeln!(out, "{}", csv_header())?;
    for (i, row) in rows.into_iter().enumerate() {
        writeln!(out, "{}", csv_row(i, &row))?;
    }
    Ok(())
}
