//! Flotilla — declarative multi-host deployment tool.
//!
//! This library provides the configuration core: loading a YAML document
//! describing networks, commands, and targets; normalizing it against its
//! declared schema version; and resolving dynamic host inventories. The
//! execution engine that connects to hosts and runs commands consumes the
//! frozen [`config::Config`] this crate produces.

pub mod cli;
pub mod config;
pub mod error;
pub mod inventory;
pub mod observability;
