//! Configuration loader.
//!
//! This module implements the loading pipeline:
//! 1. Read the file
//! 2. YAML parsing
//! 3. Schema version normalization
//! 4. Inventory resolution per network
//! 5. Freeze with `Arc`
//!
//! Loading is atomic from the caller's perspective: any failure aborts the
//! whole load with no partial document.

use std::path::Path;
use std::sync::Arc;

use crate::config::schema::Config;
use crate::config::version;
use crate::error::{ConfigError, FlotillaError};
use crate::inventory::{self, InventoryRunner, ShellRunner};
use crate::observability::{DiagnosticSink, StderrSink};

// ============================================================================
// Options
// ============================================================================

/// Options for the configuration loader.
#[derive(Debug, Clone)]
pub struct LoaderOptions {
    /// Whether to run inventory commands and append discovered hosts.
    ///
    /// `flotilla check --no-inventory` turns this off so validating a file
    /// never spawns processes.
    pub resolve_inventory: bool,
}

impl Default for LoaderOptions {
    fn default() -> Self {
        Self {
            resolve_inventory: true,
        }
    }
}

// ============================================================================
// Loader
// ============================================================================

/// Configuration loader.
///
/// Handles the full pipeline from YAML file to frozen [`Config`]. The
/// diagnostic sink and inventory runner are injectable so tests run without
/// console output or real subprocesses; production code uses the defaults.
pub struct ConfigLoader {
    options: LoaderOptions,
    sink: Box<dyn DiagnosticSink>,
    runner: Box<dyn InventoryRunner>,
}

impl ConfigLoader {
    /// Creates a loader with the given options, warning to stderr and running
    /// inventory commands through `/bin/sh`.
    #[must_use]
    pub fn new(options: LoaderOptions) -> Self {
        Self {
            options,
            sink: Box::new(StderrSink),
            runner: Box::new(ShellRunner),
        }
    }

    /// Creates a loader with default options.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(LoaderOptions::default())
    }

    /// Replaces the diagnostic sink.
    #[must_use]
    pub fn with_sink(mut self, sink: Box<dyn DiagnosticSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Replaces the inventory runner.
    #[must_use]
    pub fn with_runner(mut self, runner: Box<dyn InventoryRunner>) -> Self {
        self.runner = runner;
        self
    }

    /// Loads a configuration file and returns the frozen configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, YAML parsing fails, the
    /// declared schema version rejects the document, or an inventory command
    /// fails. No partial document survives any of these.
    pub fn load(&mut self, path: &Path) -> Result<Arc<Config>, FlotillaError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.load_raw(&raw, path)
    }

    /// Loads a configuration from an in-memory string.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`ConfigLoader::load`], minus file I/O.
    pub fn load_from_str(&mut self, raw: &str) -> Result<Arc<Config>, FlotillaError> {
        self.load_raw(raw, Path::new("<string>"))
    }

    fn load_raw(&mut self, raw: &str, path: &Path) -> Result<Arc<Config>, FlotillaError> {
        // Handle UTF-8 BOM
        let raw = raw.strip_prefix('\u{feff}').unwrap_or(raw);

        if raw.trim().is_empty() {
            return Err(ConfigError::Parse {
                path: path.to_path_buf(),
                line: None,
                message: "configuration file is empty".to_string(),
            }
            .into());
        }

        let mut config: Config = serde_yaml::from_str(raw).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            line: e.location().map(|l| l.line()),
            message: e.to_string(),
        })?;

        version::normalize(&mut config, self.sink.as_mut())?;

        if self.options.resolve_inventory {
            self.resolve_networks(&mut config)?;
        }

        tracing::debug!(
            version = %config.version,
            networks = config.networks.len(),
            commands = config.commands.len(),
            "configuration loaded"
        );

        Ok(Arc::new(config))
    }

    /// Resolves each network's inventory and appends discovered hosts after
    /// the static list.
    ///
    /// Networks are handled sequentially; each resolution is independent, so
    /// the map's unordered iteration is fine here.
    fn resolve_networks(&mut self, config: &mut Config) -> Result<(), FlotillaError> {
        for (name, network) in &mut config.networks {
            let discovered = inventory::resolve_hosts(network, self.runner.as_ref())?;
            if !discovered.is_empty() {
                tracing::info!(
                    network = %name,
                    discovered = discovered.len(),
                    "inventory hosts appended"
                );
                network.hosts.extend(discovered);
            }
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
