//! CLI entry point for edge-color jigsaw reassembly

use clap::Parser;
use tileseam::io::cli::{Cli, PuzzleProcessor};
use tileseam::io::logging;

// The permutation is the tool's output
#[allow(clippy::print_stdout)]
fn main() -> tileseam::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_level());

    let mut processor = PuzzleProcessor::new(cli);
    let outcome = processor.process()?;

    let order: Vec<String> = outcome.order.iter().map(ToString::to_string).collect();
    println!("{}", order.join(" "));
    Ok(())
}
