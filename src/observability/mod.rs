//! Observability module.
//!
//! Logging initialization and the diagnostic sink used for operator-facing
//! deprecation warnings.

pub mod diagnostics;
pub mod logging;

pub use diagnostics::{DiagnosticSink, MemorySink, StderrSink};
pub use logging::init_logging;
