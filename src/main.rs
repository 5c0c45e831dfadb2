//! CLI entry point for brick mosaic guide generation

use brickplan::io::cli::{Cli, FileProcessor};
use brickplan::io::logging::init_logging;
use clap::Parser;

fn main() -> brickplan::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;
    let mut processor = FileProcessor::new(cli);
    processor.process()
}
