//! CLI entry point for the edge-matching tile solver

use clap::Parser;
use tilecollapse::io::cli::{Cli, SolveDriver};

fn main() -> tilecollapse::Result<()> {
    let cli = Cli::parse();
    let driver = SolveDriver::new(cli);
    driver.run().map(|_| ())
}
