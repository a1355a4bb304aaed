//! Flotilla — declarative multi-host deployment tool.

use clap::Parser;

use flotilla::cli::args::Cli;
use flotilla::cli::commands;
use flotilla::error::ExitCode;
use flotilla::observability::init_logging;

fn main() {
    let cli = Cli::parse();

    if !cli.quiet {
        init_logging(cli.verbose);
    }

    match commands::dispatch(cli) {
        Ok(()) => std::process::exit(ExitCode::SUCCESS),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
