//! Diagnostic sink for operator-facing warnings.
//!
//! The schema normalizer emits non-fatal deprecation warnings. Routing them
//! through a trait keeps the normalizer free of direct console I/O and lets
//! tests capture warnings instead of scraping stderr.

use std::io::Write;

/// Receives non-fatal warnings emitted during configuration loading.
pub trait DiagnosticSink {
    /// Reports one human-readable warning line.
    fn warn(&mut self, message: &str);
}

/// Production sink: one warning line on the process's standard error stream.
#[derive(Debug, Default)]
pub struct StderrSink;

impl DiagnosticSink for StderrSink {
    fn warn(&mut self, message: &str) {
        // A failed write to stderr is not worth failing the load over.
        let _ = writeln!(std::io::stderr(), "Warning: {message}");
    }
}

/// Test sink: collects warning messages in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    /// Messages received so far, in emission order.
    pub messages: Vec<String>,
}

impl MemorySink {
    /// Creates an empty sink.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            messages: Vec::new(),
        }
    }
}

impl DiagnosticSink for MemorySink {
    fn warn(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}
