//! specter CLI
//!
//! Specification-pattern filtering and design-principle demos.

use std::io::{self, Write};

use clap::Parser;
use specter_cli::{init_logging, run, Cli};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr, so stdout only carries command output
    init_logging(cli.log_level)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run::execute(cli.command, &mut out)?;
    out.flush()?;

    Ok(())
}
