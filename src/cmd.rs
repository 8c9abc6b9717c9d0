//! Command line handling for the `cidr-range` binary.

use crate::output::{block_rows, write_blocks, write_csv, write_json};
use crate::processing::Range;
use clap::{Parser, ValueEnum};
use std::error::Error;
use std::io::Write;

/// How the listing is printed.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One dotted-quad per line.
    #[default]
    Plain,
    /// One `address/prefix` per line.
    Prefix,
    Csv,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "cidr-range", version, about = "Enumerate the sub-blocks of an IPv4 CIDR")]
pub struct CommandLine {
    /// Network to enumerate, e.g. 10.0.0.0/22
    pub cidr: String,

    /// Prefix length of each step; defaults to single addresses
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(0..=32))]
    pub block_size: Option<u8>,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Plain)]
    pub format: OutputFormat,

    /// Stop after this many blocks
    #[arg(short, long)]
    pub limit: Option<usize>,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        CommandLine::parse()
    }

    /// Build the range the arguments describe.
    pub fn range(&self) -> Result<Range, Box<dyn Error>> {
        let range = match self.block_size {
            Some(len) => Range::with_block_size(&self.cidr, len),
            None => Range::new(&self.cidr),
        }
        .map_err(|e| format!("{e}: {cidr}", cidr = self.cidr))?;
        Ok(range)
    }
}

/// Write the listing requested on the command line to `out`, one block at a time.
pub fn run<W: Write>(cmd: &CommandLine, out: &mut W) -> Result<(), Box<dyn Error>> {
    let range = cmd.range()?;
    log::info!(
        "#Start run() {network} step /{len} format={format:?}",
        network = range.network(),
        len = range.block_prefix_len(),
        format = cmd.format
    );

    let limit = cmd.limit.unwrap_or(usize::MAX);
    match cmd.format {
        OutputFormat::Plain => write_blocks(out, range.sub_blocks().take(limit), false)?,
        OutputFormat::Prefix => write_blocks(out, range.sub_blocks().take(limit), true)?,
        OutputFormat::Csv => write_csv(out, block_rows(&range, cmd.limit))?,
        OutputFormat::Json => {
            write_json(&mut *out, block_rows(&range, cmd.limit))?;
            writeln!(out)?;
        }
    }
    Ok(())
}
