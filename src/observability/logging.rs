//! Logging initialization.
//!
//! Structured logging via `tracing` with configurable verbosity and an
//! environment-based override via `FLOTILLA_LOG_LEVEL`. All log output goes
//! to stderr so that `flotilla hosts` output stays pipeable.

use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

/// Maps a verbosity level to a tracing directive string.
///
/// - 0 → `"warn"`
/// - 1 → `"info"`
/// - 2 → `"debug"`
/// - 3+ → `"trace"` (saturates)
#[must_use]
pub const fn verbosity_to_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Initializes the global tracing subscriber.
///
/// If `FLOTILLA_LOG_LEVEL` is set it takes precedence over `verbosity`.
/// Uses `try_init()` so calling this more than once (e.g. in tests) is safe.
pub fn init_logging(verbosity: u8) {
    let default_directive = verbosity_to_directive(verbosity);

    let filter = EnvFilter::try_from_env("FLOTILLA_LOG_LEVEL")
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    let use_ansi = std::io::stderr().is_terminal() && std::env::var_os("NO_COLOR").is_none();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(use_ansi)
        .with_target(verbosity >= 2)
        .with_writer(std::io::stderr)
        .try_init();
}
