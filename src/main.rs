//! CLI entry point for the runway photo emulator

use clap::Parser;
use runway_emulator::io::cli::{Cli, EmulationRunner};
use runway_emulator::io::logging::init_logging;

fn main() -> runway_emulator::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbosity());
    let mut runner = EmulationRunner::from_cli(&cli)?;
    runner.process()?;
    Ok(())
}
