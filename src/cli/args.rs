//! CLI argument definitions.
//!
//! All Clap derive structs for Flotilla command-line parsing. This is only
//! the loader-facing surface (`check`, `hosts`); the orchestration commands
//! live with the execution engine.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

// ============================================================================
// Root CLI
// ============================================================================

/// Declarative multi-host deployment tool.
#[derive(Parser, Debug)]
#[command(name = "flotilla", author, version, about)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all non-error output.
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

// ============================================================================
// Top-Level Commands
// ============================================================================

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load and validate a configuration file.
    Check(CheckArgs),

    /// Print the resolved host list of a network, one host per line.
    Hosts(HostsArgs),

    /// Generate shell completion scripts.
    Completions(CompletionsArgs),

    /// Display version information.
    Version,
}

/// Arguments for `check`.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Path to the YAML configuration file.
    #[arg(default_value = "flotilla.yml", env = "FLOTILLA_CONFIG")]
    pub config: PathBuf,

    /// Do not run inventory commands (validation spawns no processes).
    #[arg(long)]
    pub no_inventory: bool,
}

/// Arguments for `hosts`.
#[derive(Args, Debug)]
pub struct HostsArgs {
    /// Network whose resolved hosts to print.
    pub network: String,

    /// Path to the YAML configuration file.
    #[arg(
        short = 'f',
        long = "file",
        default_value = "flotilla.yml",
        env = "FLOTILLA_CONFIG"
    )]
    pub config: PathBuf,
}

/// Arguments for `completions`.
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for.
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Supported completion shells.
#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum Shell {
    /// Bourne Again Shell
    Bash,
    /// Z Shell
    Zsh,
    /// Fish shell
    Fish,
    /// `PowerShell`
    PowerShell,
    /// Elvish shell
    Elvish,
}
