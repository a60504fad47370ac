//! CLI entry point for the jigsaw tiling enumerator

use clap::Parser;
use jigtile::io::cli::{Cli, CommandRunner};
use jigtile::io::logging::init_logger;

fn main() -> jigtile::Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);
    let runner = CommandRunner::new(cli);
    runner.run()
}
