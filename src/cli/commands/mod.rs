//! CLI command dispatch and handlers.
//!
//! Routes parsed CLI arguments to the appropriate command handler.

pub mod check;
pub mod completions;
pub mod hosts;
pub mod version;

use crate::cli::args::{Cli, Commands};
use crate::error::FlotillaError;

/// Dispatch a parsed CLI invocation to the appropriate command handler.
///
/// # Errors
///
/// Returns an error if the dispatched command handler fails.
pub fn dispatch(cli: Cli) -> Result<(), FlotillaError> {
    match cli.command {
        Commands::Check(args) => check::run(&args),
        Commands::Hosts(args) => hosts::run(&args),
        Commands::Completions(args) => {
            completions::run(&args);
            Ok(())
        }
        Commands::Version => {
            version::run();
            Ok(())
        }
    }
}
