//! Dynamic host inventory resolution.
//!
//! A network may declare an `inventory` shell command whose stdout lists
//! additional hosts, one per line. Resolution runs the command through
//! `/bin/sh -c`, captures stdout, and parses it into host entries that the
//! loader appends after the network's statically declared hosts.
//!
//! The subprocess is blocking and has no timeout: a hanging inventory command
//! blocks the entire load. Process spawning sits behind the
//! [`InventoryRunner`] trait so the parsing and resolution logic is testable
//! without real subprocesses.

use std::process::{Command, Stdio};

use crate::config::schema::Network;
use crate::error::InventoryError;

// ============================================================================
// Runner
// ============================================================================

/// Executes an inventory command line and returns its captured stdout.
pub trait InventoryRunner {
    /// Runs `command` to completion.
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails to spawn or exits non-zero.
    fn run(&self, command: &str) -> Result<Vec<u8>, InventoryError>;
}

/// Production runner: `/bin/sh -c <command>` with stderr inherited from the
/// calling process so inventory diagnostics reach the operator, stdout
/// captured for parsing, and stdin closed.
#[derive(Debug, Default)]
pub struct ShellRunner;

impl InventoryRunner for ShellRunner {
    fn run(&self, command: &str) -> Result<Vec<u8>, InventoryError> {
        let output = Command::new("/bin/sh")
            .arg("-c")
            .arg(command)
            .stdin(Stdio::null())
            .stderr(Stdio::inherit())
            .output()
            .map_err(|source| InventoryError::Spawn {
                command: command.to_string(),
                source,
            })?;

        if !output.status.success() {
            return Err(InventoryError::CommandFailed {
                command: command.to_string(),
                status: output.status,
            });
        }

        Ok(output.stdout)
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolves the hosts discovered by a network's inventory command.
///
/// Returns an empty list without spawning anything when the network declares
/// no inventory command (an empty string counts as none). The caller is
/// responsible for appending the result after the network's static hosts.
///
/// # Errors
///
/// Propagates any [`InventoryError`] from the runner; no partial host list is
/// returned.
pub fn resolve_hosts(
    network: &Network,
    runner: &dyn InventoryRunner,
) -> Result<Vec<String>, InventoryError> {
    let Some(command) = network.inventory_command() else {
        return Ok(Vec::new());
    };

    tracing::debug!(command, "running inventory command");
    let output = runner.run(command)?;
    let hosts = parse_hosts(&String::from_utf8_lossy(&output));
    tracing::debug!(discovered = hosts.len(), "inventory command finished");

    Ok(hosts)
}

/// Parses inventory command output into host entries.
///
/// Lines are trimmed; empty lines and `#` comments are skipped; order is
/// preserved. `str::lines` yields a final line even without a trailing
/// newline, so end-of-stream needs no special casing here.
#[must_use]
pub fn parse_hosts(output: &str) -> Vec<String> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(ToString::to_string)
        .collect()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Runner returning canned output.
    struct StubRunner {
        output: &'static [u8],
    }

    impl InventoryRunner for StubRunner {
        fn run(&self, _command: &str) -> Result<Vec<u8>, InventoryError> {
            Ok(self.output.to_vec())
        }
    }

    /// Runner that must never be invoked.
    struct PanicRunner;

    impl InventoryRunner for PanicRunner {
        fn run(&self, command: &str) -> Result<Vec<u8>, InventoryError> {
            panic!("no process may be spawned, got: {command}");
        }
    }

    fn network_with_inventory(inventory: Option<&str>) -> Network {
        Network {
            inventory: inventory.map(ToString::to_string),
            ..Network::default()
        }
    }

    #[test]
    fn missing_inventory_spawns_nothing() {
        let network = network_with_inventory(None);
        let hosts = resolve_hosts(&network, &PanicRunner).unwrap();
        assert!(hosts.is_empty());
    }

    #[test]
    fn empty_inventory_spawns_nothing() {
        let network = network_with_inventory(Some(""));
        let hosts = resolve_hosts(&network, &PanicRunner).unwrap();
        assert!(hosts.is_empty());
    }

    #[test]
    fn parses_comments_blanks_and_unterminated_final_line() {
        // No trailing newline: the final partial line must still be captured.
        let runner = StubRunner {
            output: b"host1\n# comment\n\nhost2",
        };
        let network = network_with_inventory(Some("cat hosts.txt"));
        let hosts = resolve_hosts(&network, &runner).unwrap();
        assert_eq!(hosts, vec!["host1", "host2"]);
    }

    #[test]
    fn parse_hosts_trims_whitespace() {
        let hosts = parse_hosts("  web1.example.com  \n\tweb2.example.com\n");
        assert_eq!(hosts, vec!["web1.example.com", "web2.example.com"]);
    }

    #[test]
    fn parse_hosts_skips_comment_after_trim() {
        // A comment indented with whitespace is still a comment.
        let hosts = parse_hosts("   # staging disabled\nweb1\n");
        assert_eq!(hosts, vec!["web1"]);
    }

    #[test]
    fn all_comments_yields_empty_list() {
        let hosts = parse_hosts("# a\n# b\n\n");
        assert!(hosts.is_empty());
    }

    #[test]
    fn preserves_duplicates_and_order() {
        let hosts = parse_hosts("b\na\nb\n");
        assert_eq!(hosts, vec!["b", "a", "b"]);
    }

    #[test]
    fn shell_runner_captures_stdout() {
        let network = network_with_inventory(Some("printf 'host1\\n# comment\\n\\nhost2'"));
        let hosts = resolve_hosts(&network, &ShellRunner).unwrap();
        assert_eq!(hosts, vec!["host1", "host2"]);
    }

    #[test]
    fn shell_runner_nonzero_exit_is_error() {
        let network = network_with_inventory(Some("echo lost-host; exit 3"));
        let err = resolve_hosts(&network, &ShellRunner).unwrap_err();
        match err {
            InventoryError::CommandFailed { command, status } => {
                assert_eq!(command, "echo lost-host; exit 3");
                assert_eq!(status.code(), Some(3));
            }
            other => panic!("expected CommandFailed, got {other:?}"),
        }
    }
}
