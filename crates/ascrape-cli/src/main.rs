use ascrape_core::logging;
use clap::Parser;

mod cli;

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();

    // Initialize logging before the first request goes out.
    logging::init_logging(cli.verbose);

    match cli.run() {
        Ok(outcome) => std::process::exit(outcome.exit_code()),
        Err(err) => {
            eprintln!("ascrape error: {:#}", err);
            std::process::exit(1);
        }
    }
}
