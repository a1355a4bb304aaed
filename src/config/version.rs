//! Schema version normalization.
//!
//! Flotilla's configuration schema has evolved; every document declares (or
//! omits) a version, and each version permits a different set of command
//! fields. Normalization maps any supported version onto the single internal
//! representation: it rejects fields the declared version does not permit and
//! migrates deprecated spellings forward.
//!
//! The rules form a cumulative table rather than literal fall-through control
//! flow: each restriction names the last schema version it applies to, and a
//! document is checked against every restriction whose range covers its
//! declared version. This keeps "older versions are stricter" explicit and
//! testable per version.

use std::fmt;

use crate::config::schema::{Command, Config};
use crate::error::ConfigError;
use crate::observability::DiagnosticSink;

// ============================================================================
// Versions
// ============================================================================

/// A recognized configuration schema version.
///
/// Versions are totally ordered; anything unrecognized is rejected before any
/// command is inspected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SchemaVersion {
    /// Legacy schema, assumed when no version is declared.
    V0_1,
    /// Introduced `once`; still rejects it together with `local`.
    V0_2,
    /// Current schema: `once` and `local` are legal, `run_once` is deprecated.
    V0_3,
}

impl SchemaVersion {
    /// The version assumed for documents that declare none.
    pub const DEFAULT: Self = Self::V0_1;

    /// Parses a declared version string.
    #[must_use]
    pub fn parse(version: &str) -> Option<Self> {
        match version {
            "0.1" => Some(Self::V0_1),
            "0.2" => Some(Self::V0_2),
            "0.3" => Some(Self::V0_3),
            _ => None,
        }
    }

    /// Returns the canonical version string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::V0_1 => "0.1",
            Self::V0_2 => "0.2",
            Self::V0_3 => "0.3",
        }
    }
}

impl fmt::Display for SchemaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Restriction Table
// ============================================================================

/// A command field forbidden up to (and including) a given schema version.
struct Restriction {
    /// The command field named in the error message.
    field: &'static str,
    /// Last version this restriction applies to.
    last_version: SchemaVersion,
    /// Whether a command uses the restricted field.
    uses_field: fn(&Command) -> bool,
}

/// Ordered restriction table. Order matters only for which violation is
/// reported first when a command trips several restrictions at once.
const RESTRICTIONS: &[Restriction] = &[
    Restriction {
        field: "run_once",
        last_version: SchemaVersion::V0_1,
        uses_field: |cmd| cmd.run_once,
    },
    Restriction {
        field: "once",
        last_version: SchemaVersion::V0_2,
        uses_field: |cmd| cmd.once,
    },
    Restriction {
        field: "local",
        last_version: SchemaVersion::V0_2,
        uses_field: |cmd| !cmd.local.is_empty(),
    },
];

// ============================================================================
// Normalization
// ============================================================================

/// Validates the document against its declared schema version and migrates
/// deprecated fields.
///
/// Rewrites an absent (empty) version to [`SchemaVersion::DEFAULT`] so the
/// effective version is recorded in the document. Deprecation warnings go to
/// `sink` as one human-readable line each.
///
/// # Errors
///
/// Returns [`ConfigError::UnsupportedVersion`] for an unrecognized version
/// string, or [`ConfigError::UnsupportedField`] when a command uses a field
/// the declared version forbids. Either error aborts the whole load.
pub fn normalize(config: &mut Config, sink: &mut dyn DiagnosticSink) -> Result<(), ConfigError> {
    if config.version.is_empty() {
        config.version = SchemaVersion::DEFAULT.as_str().to_string();
    }

    let version =
        SchemaVersion::parse(&config.version).ok_or_else(|| ConfigError::UnsupportedVersion {
            version: config.version.clone(),
        })?;

    for restriction in RESTRICTIONS {
        if version > restriction.last_version {
            continue;
        }
        for (name, command) in &config.commands {
            if (restriction.uses_field)(command) {
                return Err(ConfigError::UnsupportedField {
                    field: restriction.field,
                    version: version.as_str().to_string(),
                    command: name.clone(),
                });
            }
        }
    }

    if version == SchemaVersion::V0_3 {
        migrate_run_once(config, sink);
    }

    Ok(())
}

/// Copies the deprecated `run_once` flag into `once` under v0.3.
///
/// Only the first flagged command (in map iteration order) is migrated and at
/// most one warning is emitted per call. This one-shot behavior is kept for
/// compatibility with the historical loader; see DESIGN.md before changing it.
fn migrate_run_once(config: &mut Config, sink: &mut dyn DiagnosticSink) {
    for command in config.commands.values_mut() {
        if command.run_once {
            sink.warn(&format!(
                "command.run_once was deprecated by command.once in schema v{}",
                config.version
            ));
            command.once = command.run_once;
            break;
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observability::MemorySink;

    fn config_with_command(version: &str, name: &str, command: Command) -> Config {
        let mut config = Config {
            version: version.to_string(),
            ..Config::default()
        };
        config.commands.insert(name.to_string(), command);
        config
    }

    #[test]
    fn absent_version_defaults_to_0_1() {
        let mut config = Config::default();
        let mut sink = MemorySink::new();
        normalize(&mut config, &mut sink).unwrap();
        assert_eq!(config.version, "0.1");
    }

    #[test]
    fn absent_version_applies_0_1_restrictions() {
        let mut config = config_with_command(
            "",
            "deploy",
            Command {
                run_once: true,
                ..Command::default()
            },
        );
        let mut sink = MemorySink::new();
        let err = normalize(&mut config, &mut sink).unwrap_err();
        match err {
            ConfigError::UnsupportedField { field, version, .. } => {
                assert_eq!(field, "run_once");
                assert_eq!(version, "0.1");
            }
            other => panic!("expected UnsupportedField, got {other:?}"),
        }
    }

    #[test]
    fn v0_1_rejects_once_and_local() {
        for command in [
            Command {
                once: true,
                ..Command::default()
            },
            Command {
                local: "make build".to_string(),
                ..Command::default()
            },
        ] {
            let mut config = config_with_command("0.1", "build", command);
            let mut sink = MemorySink::new();
            assert!(normalize(&mut config, &mut sink).is_err());
        }
    }

    #[test]
    fn v0_2_accepts_run_once() {
        // The run_once restriction ends at 0.1; a 0.2 document using it is legal.
        let mut config = config_with_command(
            "0.2",
            "deploy",
            Command {
                run_once: true,
                ..Command::default()
            },
        );
        let mut sink = MemorySink::new();
        normalize(&mut config, &mut sink).unwrap();
        // And untouched: migration only happens under 0.3.
        assert!(!config.commands["deploy"].once);
        assert!(sink.messages.is_empty());
    }

    #[test]
    fn v0_2_rejects_once() {
        let mut config = config_with_command(
            "0.2",
            "deploy",
            Command {
                once: true,
                ..Command::default()
            },
        );
        let mut sink = MemorySink::new();
        let err = normalize(&mut config, &mut sink).unwrap_err();
        match err {
            ConfigError::UnsupportedField {
                field,
                version,
                command,
            } => {
                assert_eq!(field, "once");
                assert_eq!(version, "0.2");
                assert_eq!(command, "deploy");
            }
            other => panic!("expected UnsupportedField, got {other:?}"),
        }
    }

    #[test]
    fn v0_2_rejects_local() {
        let mut config = config_with_command(
            "0.2",
            "build",
            Command {
                local: "make build".to_string(),
                ..Command::default()
            },
        );
        let mut sink = MemorySink::new();
        let err = normalize(&mut config, &mut sink).unwrap_err();
        match err {
            ConfigError::UnsupportedField { field, .. } => assert_eq!(field, "local"),
            other => panic!("expected UnsupportedField, got {other:?}"),
        }
    }

    #[test]
    fn v0_3_accepts_once_and_local() {
        let mut config = config_with_command(
            "0.3",
            "deploy",
            Command {
                once: true,
                local: "make build".to_string(),
                ..Command::default()
            },
        );
        let mut sink = MemorySink::new();
        normalize(&mut config, &mut sink).unwrap();
        assert!(sink.messages.is_empty());
    }

    #[test]
    fn v0_3_migrates_run_once_into_once() {
        let mut config = config_with_command(
            "0.3",
            "deploy",
            Command {
                run_once: true,
                ..Command::default()
            },
        );
        let mut sink = MemorySink::new();
        normalize(&mut config, &mut sink).unwrap();

        let command = &config.commands["deploy"];
        assert!(command.once, "run_once must be copied into once");
        assert_eq!(sink.messages.len(), 1);
        assert!(sink.messages[0].contains("run_once"));
        assert!(sink.messages[0].contains("v0.3"));
    }

    #[test]
    fn v0_3_emits_at_most_one_warning() {
        let mut config = Config {
            version: "0.3".to_string(),
            ..Config::default()
        };
        for name in ["alpha", "beta", "gamma"] {
            config.commands.insert(
                name.to_string(),
                Command {
                    run_once: true,
                    ..Command::default()
                },
            );
        }
        let mut sink = MemorySink::new();
        normalize(&mut config, &mut sink).unwrap();

        assert_eq!(sink.messages.len(), 1);
        // One-shot migration: exactly one command gained `once`.
        let migrated = config.commands.values().filter(|c| c.once).count();
        assert_eq!(migrated, 1);
    }

    #[test]
    fn unknown_version_rejected_before_command_checks() {
        // This command would be illegal under every supported version, but the
        // version check must fire first.
        let mut config = config_with_command(
            "9.9",
            "deploy",
            Command {
                run_once: true,
                once: true,
                local: "make".to_string(),
                ..Command::default()
            },
        );
        let mut sink = MemorySink::new();
        let err = normalize(&mut config, &mut sink).unwrap_err();
        match err {
            ConfigError::UnsupportedVersion { version } => assert_eq!(version, "9.9"),
            other => panic!("expected UnsupportedVersion, got {other:?}"),
        }
    }

    #[test]
    fn versions_are_totally_ordered() {
        assert!(SchemaVersion::V0_1 < SchemaVersion::V0_2);
        assert!(SchemaVersion::V0_2 < SchemaVersion::V0_3);
    }

    #[test]
    fn parse_round_trips() {
        for version in [SchemaVersion::V0_1, SchemaVersion::V0_2, SchemaVersion::V0_3] {
            assert_eq!(SchemaVersion::parse(version.as_str()), Some(version));
        }
        assert_eq!(SchemaVersion::parse("1.0"), None);
        assert_eq!(SchemaVersion::parse(""), None);
    }
}
