//! Configuration module.
//!
//! Loads Flotilla configuration files, normalizes them against their
//! declared schema version, and resolves dynamic host inventories.

pub mod loader;
pub mod schema;
pub mod version;

pub use loader::{ConfigLoader, LoaderOptions};
pub use schema::{Command, Config, Network, Upload};
pub use version::SchemaVersion;
