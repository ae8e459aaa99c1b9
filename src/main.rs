use anyhow::Result;
use clap::Parser;

use csvmerge::cli::{self, Cli};

fn main() -> Result<()> {
    let args = Cli::parse();
    cli::initialise_tracing(args.verbose)?;
    cli::run(args)
}
