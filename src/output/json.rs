//! JSON output for sub-block listings.

use super::row::BlockRow;
use serde::{Serialize, Serializer};
use std::io::Write;

/// Serializes an iterator as a JSON array without collecting it.
struct RowSeq<I>(I);

impl<I> Serialize for RowSeq<I>
where
    I: Iterator<Item = BlockRow> + Clone,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.0.clone())
    }
}

/// Write rows as a pretty printed JSON array, one element at a time.
pub fn write_json<W, I>(out: W, rows: I) -> Result<(), serde_json::Error>
where
    W: Write,
    I: Iterator<Item = BlockRow> + Clone,
{
    serde_json::to_writer_pretty(out, &RowSeq(rows))
}
