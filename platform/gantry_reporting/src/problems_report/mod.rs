//! The problems report: every problem of a build, as one JSON document.

use std::fs;
use std::path::PathBuf;

use gantry_problems::Problem;
use gantry_progress::emitter::SeverityCounts;
use gantry_progress::{project, ProblemProgressDetails};
use serde::Serialize;

use crate::{ReportingError, ReportingExtension, ReportingResult, SimpleReport};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ProblemsDocument<'p> {
    project: &'p str,
    summary: SeverityCounts,
    problems: Vec<ProblemProgressDetails<'p>>,
}

/// Writes projected problems under the reports base directory.
pub struct ProblemsReport;

impl ProblemsReport {
    /// Name of the report declaration that can override the output location.
    pub const NAME: &'static str = "problems";

    /// Default output path, relative to the reports base directory.
    pub const DEFAULT_PATH: &'static str = "problems/problems-report.json";

    /// Where the report will be written for `extension`.
    ///
    /// A report declared as [`ProblemsReport::NAME`] with an output
    /// location wins over [`ProblemsReport::DEFAULT_PATH`].
    pub fn destination(extension: &ReportingExtension) -> PathBuf {
        let configured = extension
            .reports()
            .get(Self::NAME)
            .and_then(SimpleReport::output_location);
        match configured {
            Some(location) => extension.file(location),
            None => extension.file(Self::DEFAULT_PATH),
        }
    }

    /// Render the report document as pretty-printed JSON.
    pub fn render(project_name: &str, problems: &[Problem]) -> ReportingResult<String> {
        let problems: Vec<ProblemProgressDetails<'_>> = problems.iter().map(project).collect();
        let document = ProblemsDocument {
            project: project_name,
            summary: SeverityCounts::of(&problems),
            problems,
        };
        Ok(serde_json::to_string_pretty(&document)?)
    }

    /// Write the report and return the path written.
    pub fn write(extension: &ReportingExtension, problems: &[Problem]) -> ReportingResult<PathBuf> {
        let destination = Self::destination(extension);
        let json = Self::render(extension.layout().name(), problems)?;

        if let Some(parent) = destination.parent() {
            fs::create_dir_all(parent).map_err(|source| ReportingError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(&destination, json).map_err(|source| ReportingError::WriteReport {
            path: destination.clone(),
            source,
        })?;

        tracing::info!(
            path = %destination.display(),
            problems = problems.len(),
            "wrote problems report"
        );
        Ok(destination)
    }
}

#[cfg(test)]
mod tests;
