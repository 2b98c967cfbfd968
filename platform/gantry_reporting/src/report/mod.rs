//! Report declarations.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::{ReportingError, ReportingResult};

/// Whether a report is written as a single file or a directory of files.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputType {
    File,
    Directory,
}

/// A named report output.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct SimpleReport {
    name: String,
    display_name: String,
    output_type: OutputType,
    output_location: Option<PathBuf>,
    required: bool,
}

impl SimpleReport {
    /// Create a report with no output location that is not required.
    pub fn new(
        name: impl Into<String>,
        display_name: impl Into<String>,
        output_type: OutputType,
    ) -> Self {
        SimpleReport {
            name: name.into(),
            display_name: display_name.into(),
            output_type,
            output_location: None,
            required: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn output_type(&self) -> OutputType {
        self.output_type
    }

    /// Where the report is written. Relative locations are resolved
    /// against the reports base directory by the caller.
    pub fn output_location(&self) -> Option<&Path> {
        self.output_location.as_deref()
    }

    /// Whether the report should be generated.
    pub fn required(&self) -> bool {
        self.required
    }

    pub fn set_output_location(&mut self, location: impl Into<PathBuf>) -> &mut Self {
        self.output_location = Some(location.into());
        self
    }

    pub fn set_required(&mut self, required: bool) -> &mut Self {
        self.required = required;
        self
    }

    /// Apply `configure` to this report and return it for chaining.
    pub fn configure(&mut self, configure: impl FnOnce(&mut Self)) -> &mut Self {
        configure(self);
        self
    }
}

impl fmt::Display for SimpleReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Report {}", self.name)
    }
}

/// Reports by name, in registration order.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct ReportContainer {
    reports: Vec<SimpleReport>,
}

impl ReportContainer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a report. Names are unique within a container.
    pub fn register(&mut self, report: SimpleReport) -> ReportingResult<&mut SimpleReport> {
        if self.get(report.name()).is_some() {
            return Err(ReportingError::DuplicateReport {
                name: report.name,
            });
        }
        tracing::debug!(report = %report.name, "registered report");
        self.reports.push(report);
        let index = self.reports.len() - 1;
        Ok(&mut self.reports[index])
    }

    pub fn get(&self, name: &str) -> Option<&SimpleReport> {
        self.reports.iter().find(|report| report.name == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut SimpleReport> {
        self.reports.iter_mut().find(|report| report.name == name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SimpleReport> {
        self.reports.iter()
    }

    /// Reports marked as required, in registration order.
    pub fn required(&self) -> impl Iterator<Item = &SimpleReport> {
        self.reports.iter().filter(|report| report.required)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.reports.iter().map(SimpleReport::name)
    }

    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }
}

impl<'a> IntoIterator for &'a ReportContainer {
    type Item = &'a SimpleReport;
    type IntoIter = std::slice::Iter<'a, SimpleReport>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
