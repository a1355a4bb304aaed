//! Error types for Flotilla.
//!
//! Every failure during configuration loading is fatal to the whole load:
//! either a fully normalized, fully resolved [`crate::config::schema::Config`]
//! is returned, or one of these errors is, and the document is discarded.

use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

// ============================================================================
// Exit Codes
// ============================================================================

/// Exit codes for Flotilla CLI operations.
///
/// These codes follow Unix conventions.
pub struct ExitCode;

impl ExitCode {
    /// Successful execution
    pub const SUCCESS: i32 = 0;

    /// General error
    pub const ERROR: i32 = 1;

    /// Configuration error (invalid YAML, unsupported schema version)
    pub const CONFIG_ERROR: i32 = 2;

    /// I/O error (file not found, permission denied)
    pub const IO_ERROR: i32 = 3;

    /// Inventory error (inventory command failed to start or exited non-zero)
    pub const INVENTORY_ERROR: i32 = 4;

    /// Usage error (invalid arguments, missing required options)
    pub const USAGE_ERROR: i32 = 64;

    /// Interrupted by SIGINT (Ctrl+C)
    pub const INTERRUPTED: i32 = 130;

    /// Terminated by SIGTERM
    pub const TERMINATED: i32 = 143;
}

// ============================================================================
// Top-Level Error
// ============================================================================

/// Top-level error type for Flotilla operations.
///
/// Aggregates the domain-specific errors and provides a unified interface
/// for error handling and exit code mapping.
#[derive(Debug, Error)]
pub enum FlotillaError {
    /// Configuration loading or schema normalization error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Inventory command execution error
    #[error(transparent)]
    Inventory(#[from] InventoryError),

    /// I/O error outside of configuration loading
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl FlotillaError {
    /// Returns the appropriate exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Config(ConfigError::Io { .. }) | Self::Io(_) => ExitCode::IO_ERROR,
            Self::Config(_) => ExitCode::CONFIG_ERROR,
            Self::Inventory(_) => ExitCode::INVENTORY_ERROR,
        }
    }
}

// ============================================================================
// Configuration Errors
// ============================================================================

/// Configuration loading and schema normalization errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file could not be read
    #[error("cannot read {path}: {source}")]
    Io {
        /// Path to the configuration file
        path: PathBuf,
        /// Underlying I/O failure
        source: std::io::Error,
    },

    /// YAML parsing failed
    #[error("parse error in {path}: {message}")]
    Parse {
        /// Path to the configuration file
        path: PathBuf,
        /// Line number where the error occurred (if available)
        line: Option<usize>,
        /// Error message from the parser
        message: String,
    },

    /// A command uses a field the declared schema version does not permit
    #[error("command.{field} is not supported in schema v{version} (command '{command}')")]
    UnsupportedField {
        /// The offending command field (e.g. `once`, `local`)
        field: &'static str,
        /// The declared (or defaulted) schema version
        version: String,
        /// Name of the offending command
        command: String,
    },

    /// The declared schema version is not recognized
    #[error("unsupported schema version '{version}', please update flotilla")]
    UnsupportedVersion {
        /// The declared version string
        version: String,
    },
}

// ============================================================================
// Inventory Errors
// ============================================================================

/// Inventory command execution errors.
///
/// The inventory command is a blocking subprocess; either failure mode
/// aborts the entire load with no partial host list.
#[derive(Debug, Error)]
pub enum InventoryError {
    /// The inventory command could not be spawned
    #[error("inventory command failed to start: {command}: {source}")]
    Spawn {
        /// The shell command line that failed to start
        command: String,
        /// Underlying spawn failure
        source: std::io::Error,
    },

    /// The inventory command exited with a non-zero status
    #[error("inventory command failed ({status}): {command}")]
    CommandFailed {
        /// The shell command line that failed
        command: String,
        /// Exit status reported by the shell
        status: ExitStatus,
    },
}

// ============================================================================
// Result Type Alias
// ============================================================================

/// Result type alias for Flotilla operations.
pub type Result<T> = std::result::Result<T, FlotillaError>;

// ============================================================================
// Tests
// ============================================================================
