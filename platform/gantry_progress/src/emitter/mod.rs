//! Problem Emitters
//!
//! Render projected problems for different audiences:
//! - Terminal: Colored, human-readable output
//! - JSON: Machine-readable output for tooling
//!
//! Emitters only see [`ProblemProgressDetails`], never the internal model.

mod json;
mod terminal;

pub use json::JsonEmitter;
pub use terminal::{ColorMode, TerminalEmitter};

use gantry_problems::Severity;
use serde::Serialize;

use crate::ProblemProgressDetails;

/// Trait for emitting problems in various formats.
pub trait ProblemEmitter {
    /// Emit a single problem.
    fn emit(&mut self, problem: &ProblemProgressDetails<'_>);

    /// Emit multiple problems.
    fn emit_all(&mut self, problems: &[ProblemProgressDetails<'_>]) {
        for problem in problems {
            self.emit(problem);
        }
    }

    /// Flush any buffered output.
    fn flush(&mut self);

    /// Emit a summary of the problems seen.
    fn emit_summary(&mut self, counts: &SeverityCounts);
}

/// Problem counts by severity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct SeverityCounts {
    pub errors: usize,
    pub warnings: usize,
    pub advice: usize,
}

impl SeverityCounts {
    /// Tally a batch of problems.
    pub fn of<'a, 'p: 'a>(problems: impl IntoIterator<Item = &'a ProblemProgressDetails<'p>>) -> Self {
        let mut counts = SeverityCounts::default();
        for problem in problems {
            counts.record(problem);
        }
        counts
    }

    /// Count one problem. Unrecognized severity names are not counted.
    pub fn record(&mut self, problem: &ProblemProgressDetails<'_>) {
        match problem.problem_definition.severity_level() {
            Some(Severity::Error) => self.errors += 1,
            Some(Severity::Warning) => self.warnings += 1,
            Some(Severity::Advice) => self.advice += 1,
            None => {}
        }
    }

    pub fn total(&self) -> usize {
        self.errors + self.warnings + self.advice
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}
