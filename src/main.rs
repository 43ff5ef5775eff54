//! CLI entry point for the Wilson's algorithm maze generator

use clap::Parser;
use wilsonmaze::io::cli::{Cli, MazeCommand};
use wilsonmaze::io::logging;

fn main() -> wilsonmaze::Result<()> {
    let cli = Cli::parse();
    logging::init(logging::level_for(cli.quiet, cli.verbose));
    MazeCommand::new(cli).run().map(drop)
}
