use cidr_range::cmd::{run, CommandLine};
use cidr_range::config::init_logging;
use std::error::Error;
use std::io::{BufWriter, Write};

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let commands = CommandLine::parse_args();
    init_logging()?;
    log::info!("#Start main()");

    let mut out = BufWriter::new(std::io::stdout().lock());
    run(&commands, &mut out)?;
    out.flush()?;

    Ok(())
}
