//! Terminal Emitter
//!
//! Human-readable problem output with optional ANSI color support.
//!
//! ```text
//! warning[deprecation]: `jcenter()` is deprecated
//!   --> build.gantry:4:5
//!   ::: task ':app:dependencies'
//!   = details: JCenter is read-only.
//!   = help: use mavenCentral() instead
//!   = docs: https://docs.example.org/jcenter
//! ```

use std::io::Write;

use gantry_problems::Severity;

use crate::{LocationView, ProblemProgressDetails};

use super::{ProblemEmitter, SeverityCounts};

mod colors {
    pub const ERROR: &str = "\x1b[1;31m";
    pub const WARNING: &str = "\x1b[1;33m";
    pub const ADVICE: &str = "\x1b[1;36m";
    pub const HELP: &str = "\x1b[1;32m";
    pub const BOLD: &str = "\x1b[1m";
    pub const SECONDARY: &str = "\x1b[1;34m";
    pub const RESET: &str = "\x1b[0m";
}

fn plural_s(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

/// When the terminal emitter colors its output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Color only when writing to a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// `is_tty` only matters for [`ColorMode::Auto`].
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Prints projected problems in a compiler-style layout.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
}

impl<W: Write> TerminalEmitter<W> {
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
        }
    }

    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }

    /// Severity names outside the known set are printed as-is, uncolored.
    fn write_severity(&mut self, problem: &ProblemProgressDetails<'_>) {
        match problem.problem_definition.severity_level() {
            Some(severity) => {
                let color = match severity {
                    Severity::Error => colors::ERROR,
                    Severity::Warning => colors::WARNING,
                    Severity::Advice => colors::ADVICE,
                };
                self.write_colored(&severity.to_string(), color);
            }
            None => {
                let _ = write!(self.writer, "{}", problem.problem_definition.severity);
            }
        }
    }

    fn write_group_path(&mut self, path: &str) {
        if self.colors {
            let _ = write!(self.writer, "{}[{path}]{}", colors::BOLD, colors::RESET);
        } else {
            let _ = write!(self.writer, "[{path}]");
        }
    }

    fn write_location(&mut self, location: &LocationView<'_>) {
        let marker = match location {
            LocationView::Generic { .. } => ":::",
            LocationView::File { .. } | LocationView::LineInFile { .. } => "-->",
        };
        let _ = write!(self.writer, "  {marker} ");
        self.write_colored(location.display_name(), colors::SECONDARY);
        let _ = writeln!(self.writer);
    }

    /// Write a `  = kind: text` trailer line.
    fn write_trailer(&mut self, kind: &str, color: &str, text: &str) {
        let _ = write!(self.writer, "  = ");
        self.write_colored(kind, color);
        let _ = writeln!(self.writer, ": {text}");
    }
}

impl<W: Write> ProblemEmitter for TerminalEmitter<W> {
    fn emit(&mut self, problem: &ProblemProgressDetails<'_>) {
        // Header: severity[group:path]: headline
        self.write_severity(problem);
        self.write_group_path(&problem.problem_definition.group_path());
        let _ = writeln!(self.writer, ": {}", problem.headline());

        for location in &problem.locations {
            self.write_location(location);
        }

        if let Some(details) = problem.details {
            self.write_trailer("details", colors::BOLD, details);
        }

        for solution in problem.solutions {
            self.write_trailer("help", colors::HELP, solution);
        }

        if let Some(link) = problem.problem_definition.documentation_link {
            let text = match (link.url, link.consult_documentation_message) {
                (Some(url), Some(message)) => format!("{message} ({url})"),
                (Some(text), None) | (None, Some(text)) => text.to_string(),
                (None, None) => String::new(),
            };
            if !text.is_empty() {
                self.write_trailer("docs", colors::BOLD, &text);
            }
        }

        if let Some(failure) = problem.failure {
            self.write_trailer("caused by", colors::ERROR, &failure.message());
            for cause in failure.causes() {
                self.write_trailer("caused by", colors::ERROR, &cause.to_string());
            }
        }

        let _ = writeln!(self.writer);
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    fn emit_summary(&mut self, counts: &SeverityCounts) {
        if counts.is_empty() {
            return;
        }

        let mut parts = Vec::with_capacity(3);
        if counts.errors > 0 {
            parts.push(format!("{} error{}", counts.errors, plural_s(counts.errors)));
        }
        if counts.warnings > 0 {
            parts.push(format!(
                "{} warning{}",
                counts.warnings,
                plural_s(counts.warnings)
            ));
        }
        if counts.advice > 0 {
            parts.push(format!("{} advice", counts.advice));
        }

        let (label, color) = if counts.errors > 0 {
            ("error", colors::ERROR)
        } else if counts.warnings > 0 {
            ("warning", colors::WARNING)
        } else {
            ("advice", colors::ADVICE)
        };
        self.write_colored(label, color);
        let _ = writeln!(self.writer, ": {} reported", parts.join(", "));
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
