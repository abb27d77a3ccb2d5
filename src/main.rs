//! CLI entry point for the tile assembly engine

use clap::Parser;
use ghosttile::io::cli::{Cli, Runner};

// Allow print for the final run summary
#[allow(clippy::print_stdout)]
fn main() -> ghosttile::Result<()> {
    let cli = Cli::parse();
    let runner = Runner::new(cli);
    let summary = runner.run()?;
    println!("{summary}");
    Ok(())
}
