//! Configuration schema types.
//!
//! These types are deserialized from a Flotilla YAML configuration file and
//! describe remote networks, the commands that can be run against them, and
//! named target groups. Decoding is plain `serde_yaml`; all validation lives
//! in the normalizer and the loader.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

// ============================================================================
// Top-Level Configuration
// ============================================================================

/// Root configuration document.
///
/// Created once at load time and frozen afterwards; the execution engine
/// only ever sees it behind an `Arc`. Network and command names are unique
/// by construction (map keys). Iteration order of the maps is unordered —
/// nothing may depend on it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Declared schema version. Empty when absent; the normalizer rewrites
    /// an empty version to the legacy `"0.1"`.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub version: String,

    /// Named groups of hosts sharing env vars and an optional bastion.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub networks: HashMap<String, Network>,

    /// Named units of work runnable against a network.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub commands: HashMap<String, Command>,

    /// Named ordered sequences of command names. Opaque to the loader;
    /// interpreted by the execution engine.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub targets: HashMap<String, Vec<String>>,

    /// Global environment variables applied to every command.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub env: HashMap<String, String>,
}

// ============================================================================
// Network
// ============================================================================

/// A named group of hosts with extra custom env vars.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Network {
    /// Environment variables specific to this network.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub env: HashMap<String, String>,

    /// Shell command whose stdout lists additional hosts, one per line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inventory: Option<String>,

    /// Statically declared host addresses. After loading, discovered
    /// inventory hosts are appended here, in output order, without
    /// deduplication.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hosts: Vec<String>,

    /// Jump host through which connections to this network are proxied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bastion: Option<String>,
}

impl Network {
    /// Returns the inventory command, treating an empty string as absent.
    #[must_use]
    pub fn inventory_command(&self) -> Option<&str> {
        self.inventory.as_deref().filter(|cmd| !cmd.is_empty())
    }
}

// ============================================================================
// Command
// ============================================================================

/// A named unit of work to be run on every host of a targeted network.
///
/// Which fields are legal depends on the document's declared schema version;
/// the normalizer enforces that before the config is handed out.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Command {
    /// Human-readable description.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub desc: String,

    /// Command(s) to be run locally.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub local: String,

    /// Command(s) to be run remotely.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub run: String,

    /// Path to a script whose contents are run remotely.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub script: String,

    /// File copy operations performed before the command runs.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub upload: Vec<Upload>,

    /// Attach local stdout to the remote command's stdin.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub stdin: bool,

    /// Run on exactly one host of the network instead of all of them.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub once: bool,

    // TODO: serial (max hosts processed in parallel) — reserved in the
    // schema, not implemented yet.
    //
    /// Deprecated spelling of `once`, kept for configs predating v0.3.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub run_once: bool,
}

// ============================================================================
// Upload
// ============================================================================

/// A file copy operation from a local `src` path to the `dst` path on every
/// host of a targeted network.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Upload {
    /// Local source path.
    pub src: String,

    /// Remote destination path.
    pub dst: String,

    /// Exclusion pattern passed through to the copy mechanism.
    #[serde(default, rename = "exclude", skip_serializing_if = "String::is_empty")]
    pub exclude: String,
}

// ============================================================================
// Tests
// ============================================================================
