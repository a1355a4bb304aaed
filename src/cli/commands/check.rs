//! `check` command handler.
//!
//! Loads a configuration file through the full pipeline and prints a short
//! summary. With `--no-inventory` the loader skips inventory commands, so
//! validating an untrusted file never spawns processes.

use crate::cli::args::CheckArgs;
use crate::config::{ConfigLoader, LoaderOptions};
use crate::error::FlotillaError;

/// Load and validate a configuration file.
///
/// # Errors
///
/// Returns any loader error: unreadable file, malformed YAML, unsupported
/// schema version, or a failed inventory command.
pub fn run(args: &CheckArgs) -> Result<(), FlotillaError> {
    tracing::info!(config = %args.config.display(), "loading configuration");

    let mut loader = ConfigLoader::new(LoaderOptions {
        resolve_inventory: !args.no_inventory,
    });
    let config = loader.load(&args.config)?;

    // Targets are opaque to the loader, but a dangling command name is
    // almost certainly a typo worth surfacing.
    for (target, command_names) in &config.targets {
        for name in command_names {
            if !config.commands.contains_key(name) {
                tracing::warn!(target = %target, command = %name, "target references unknown command");
            }
        }
    }

    println!("{}: OK (schema v{})", args.config.display(), config.version);

    // Maps iterate unordered; sort for stable output.
    let mut networks: Vec<_> = config.networks.iter().collect();
    networks.sort_by(|a, b| a.0.cmp(b.0));

    println!("  networks: {}", networks.len());
    for (name, network) in networks {
        println!("    {name}: {} host(s)", network.hosts.len());
    }
    println!("  commands: {}", config.commands.len());
    println!("  targets:  {}", config.targets.len());

    Ok(())
}
