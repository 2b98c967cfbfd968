//! JSON Emitter
//!
//! Machine-readable problem output: a JSON array with one object per problem.

use std::io::Write;

use crate::ProblemProgressDetails;

use super::{ProblemEmitter, SeverityCounts};

/// JSON emitter for machine-readable output.
pub struct JsonEmitter<W: Write> {
    writer: W,
    first: bool,
}

impl<W: Write> JsonEmitter<W> {
    /// Create a new JSON emitter.
    pub fn new(writer: W) -> Self {
        JsonEmitter {
            writer,
            first: true,
        }
    }

    /// Begin the JSON array output.
    pub fn begin(&mut self) {
        let _ = writeln!(self.writer, "[");
    }

    /// End the JSON array output.
    pub fn end(&mut self) {
        let _ = writeln!(self.writer, "\n]");
    }

    /// Give back the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ProblemEmitter for JsonEmitter<W> {
    fn emit(&mut self, problem: &ProblemProgressDetails<'_>) {
        if !self.first {
            let _ = writeln!(self.writer, ",");
        }
        self.first = false;

        if let Err(e) = serde_json::to_writer_pretty(&mut self.writer, problem) {
            tracing::warn!("failed to write problem as JSON: {e}");
        }
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    fn emit_summary(&mut self, _counts: &SeverityCounts) {
        // JSON output doesn't need a summary - the data speaks for itself
    }
}
