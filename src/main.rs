use clap::Parser;
use pricegrid::cli::{self, Cli};
use std::process;

fn main() {
    let cli = Cli::parse();
    cli::setup_logging(&cli);

    if let Err(error) = cli::run(cli) {
        eprintln!("Error: {:#}", error);
        process::exit(1);
    }
}
