use std::io::Write;

use super::diagnostic::Diagnostic;

/// Line printed on stdout when a run finishes without diagnostics.
pub const SUCCESS_MESSAGE: &str = "Static checks were passed.";

/// Collects diagnostics in emission order and echoes each one to a sink
/// the moment it is recorded.
///
/// The sink is stderr in the binary and an in-memory buffer in tests. Once
/// a diagnostic is recorded the report is failed for the rest of the run.
pub struct Report<W: Write> {
    sink: W,
    diagnostics: Vec<Diagnostic>,
}

impl<W: Write> Report<W> {
    #[must_use]
    pub const fn new(sink: W) -> Self {
        Self {
            sink,
            diagnostics: Vec::new(),
        }
    }

    /// Record a batch of diagnostics, printing each one.
    pub fn extend(&mut self, batch: impl IntoIterator<Item = Diagnostic>) {
        for diagnostic in batch {
            self.record(diagnostic);
        }
    }

    pub fn record(&mut self, diagnostic: Diagnostic) {
        // A closed stderr must not turn a violation into a crash.
        let _ = writeln!(self.sink, "{diagnostic}");
        self.diagnostics.push(diagnostic);
    }

    #[must_use]
    pub fn is_failed(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    #[must_use]
    pub fn into_parts(self) -> (W, Vec<Diagnostic>) {
        (self.sink, self.diagnostics)
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
