//! Reporting settings loaded from a TOML file.
//!
//! ```toml
//! [project]
//! name = "app"
//! version = "1.2"
//! build-dir = "build"
//!
//! [reporting]
//! base-dir = "out/reports"
//!
//! [[reporting.reports]]
//! name = "problems"
//! display-name = "Problems report"
//! output-type = "file"
//! output-location = "problems/problems-report.json"
//! required = true
//! ```
//!
//! Every key is optional. Relative paths are resolved against the project
//! directory.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::{
    OutputType, ProjectLayout, ReportingError, ReportingExtension, ReportingResult, SimpleReport,
};

/// Project name used when neither the settings nor the project directory
/// provide one.
const FALLBACK_PROJECT_NAME: &str = "project";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct ReportingSettings {
    #[serde(default)]
    pub project: ProjectSettings,
    #[serde(default)]
    pub reporting: ReportingSection,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct ProjectSettings {
    pub name: Option<String>,
    pub version: Option<String>,
    pub build_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct ReportingSection {
    pub base_dir: Option<PathBuf>,
    #[serde(default)]
    pub reports: Vec<ReportSettings>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct ReportSettings {
    pub name: String,
    pub display_name: Option<String>,
    pub output_type: OutputType,
    pub output_location: Option<PathBuf>,
    #[serde(default)]
    pub required: bool,
}

impl ReportingSettings {
    /// Read and parse a settings file.
    pub fn load(path: &Path) -> ReportingResult<Self> {
        let text = fs::read_to_string(path).map_err(|source| ReportingError::ReadSettings {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_toml_str(&text, path)?;
        tracing::debug!(path = %path.display(), "loaded reporting settings");
        Ok(settings)
    }

    /// Parse settings text. `origin` is only used in error messages.
    pub fn from_toml_str(text: &str, origin: &Path) -> ReportingResult<Self> {
        toml::from_str(text).map_err(|source| ReportingError::ParseSettings {
            path: origin.to_path_buf(),
            source,
        })
    }

    /// Build the reporting extension for the project at `project_dir`.
    ///
    /// The project name defaults to the directory's name. Fails if two
    /// reports share a name.
    pub fn into_extension(self, project_dir: &Path) -> ReportingResult<ReportingExtension> {
        let name = self
            .project
            .name
            .or_else(|| {
                project_dir
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
            })
            .unwrap_or_else(|| FALLBACK_PROJECT_NAME.to_string());

        let mut layout = ProjectLayout::new(project_dir, name);
        if let Some(build_dir) = &self.project.build_dir {
            layout.set_build_dir(build_dir);
        }
        if let Some(version) = self.project.version {
            layout = layout.with_version(version);
        }

        let mut extension = ReportingExtension::new(layout);
        if let Some(base_dir) = &self.reporting.base_dir {
            extension.set_base_directory(base_dir);
        }

        for report in self.reporting.reports {
            let display_name = report
                .display_name
                .unwrap_or_else(|| report.name.clone());
            let registered = extension.reports_mut().register(SimpleReport::new(
                report.name,
                display_name,
                report.output_type,
            ))?;
            registered.set_required(report.required);
            if let Some(location) = report.output_location {
                registered.set_output_location(location);
            }
        }

        Ok(extension)
    }
}
