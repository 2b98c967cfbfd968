use std::path::PathBuf;

use thiserror::Error;

pub type ReportingResult<T> = Result<T, ReportingError>;

#[derive(Debug, Error)]
pub enum ReportingError {
    #[error("Failed to read settings file at {path}: {source}")]
    ReadSettings {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Settings at {path} could not be parsed: {source}")]
    ParseSettings {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("A report named `{name}` is already registered.")]
    DuplicateReport { name: String },
    #[error("Failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to write report to {path}: {source}")]
    WriteReport {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to serialize the problems report: {source}")]
    Serialize {
        #[from]
        source: serde_json::Error,
    },
}

impl ReportingError {
    /// The file or directory the error is about, if any.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            ReportingError::ReadSettings { path, .. }
            | ReportingError::ParseSettings { path, .. }
            | ReportingError::CreateDir { path, .. }
            | ReportingError::WriteReport { path, .. } => Some(path.as_path()),
            ReportingError::DuplicateReport { .. } | ReportingError::Serialize { .. } => None,
        }
    }
}
