//! `hosts` command handler.
//!
//! Prints the fully resolved host list of one network, one host per line,
//! for consumption by shell scripts.

use crate::cli::args::HostsArgs;
use crate::config::ConfigLoader;
use crate::error::FlotillaError;

/// Print the resolved hosts of the named network.
///
/// # Errors
///
/// Returns any loader error, or an invalid-input error when the network is
/// not declared in the configuration.
pub fn run(args: &HostsArgs) -> Result<(), FlotillaError> {
    let mut loader = ConfigLoader::with_defaults();
    let config = loader.load(&args.config)?;

    let Some(network) = config.networks.get(&args.network) else {
        let mut known: Vec<_> = config.networks.keys().map(String::as_str).collect();
        known.sort_unstable();
        return Err(FlotillaError::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!(
                "unknown network '{}' (known: {})",
                args.network,
                known.join(", ")
            ),
        )));
    };

    for host in &network.hosts {
        println!("{host}");
    }

    Ok(())
}
