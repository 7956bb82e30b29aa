use std::io::{self, Write};

use clap::Parser;

use imgprep::dcb;

/// Convert a raw binary stream on stdin into assembler DCB lines on
/// stdout, 16 bytes per line.
#[derive(Parser)]
#[command(name = "bintodcb", version, about)]
struct Cli {}

fn main() -> anyhow::Result<()> {
    Cli::parse();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    dcb::write_dcb_listing(stdin.lock(), &mut out)?;
    out.flush()?;
    Ok(())
}
