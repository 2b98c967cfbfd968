//! Reporting settings and report outputs.
//!
//! - [`ReportingExtension`]: the project's `reporting` settings. Owns the
//!   reports base directory (by convention `<build-dir>/reports`) and
//!   resolves report paths against it on demand.
//! - [`SimpleReport`] / [`ReportContainer`]: named report declarations.
//! - [`ReportingSettings`]: the same settings loaded from a TOML file.
//! - [`ProblemsReport`]: writes the build's problems as a JSON report.
//!
//! ```text
//! let settings = ReportingSettings::load(Path::new("gantry.toml"))?;
//! let reporting = settings.into_extension(project_dir)?;
//! let written = ProblemsReport::write(&reporting, &problems)?;
//! ```

mod error;
mod extension;
mod problems_report;
mod report;
mod settings;

pub use error::{ReportingError, ReportingResult};
pub use extension::{ProjectLayout, ReportingExtension};
pub use problems_report::ProblemsReport;
pub use report::{OutputType, ReportContainer, SimpleReport};
pub use settings::{ProjectSettings, ReportSettings, ReportingSection, ReportingSettings};
