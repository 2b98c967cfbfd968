//! The project's `reporting` extension.

use std::path::{Component, Path, PathBuf};

use crate::ReportContainer;

/// Version value meaning "no version set".
const DEFAULT_VERSION: &str = "unspecified";

/// Where a project lives and what it is called.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct ProjectLayout {
    project_dir: PathBuf,
    build_dir: PathBuf,
    name: String,
    version: Option<String>,
}

impl ProjectLayout {
    /// Layout with the build directory at `<project_dir>/build`.
    pub fn new(project_dir: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        let project_dir: PathBuf = project_dir.into();
        let project_dir = normalize(&project_dir);
        ProjectLayout {
            build_dir: project_dir.join("build"),
            project_dir,
            name: name.into(),
            version: None,
        }
    }

    /// Move the build directory. Relative paths are resolved against the
    /// project directory.
    #[must_use]
    pub fn with_build_dir(mut self, build_dir: impl AsRef<Path>) -> Self {
        self.set_build_dir(build_dir);
        self
    }

    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn set_build_dir(&mut self, build_dir: impl AsRef<Path>) {
        self.build_dir = resolve(&self.project_dir, build_dir.as_ref());
    }

    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    pub fn build_dir(&self) -> &Path {
        &self.build_dir
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The version, or `None` when unset or `"unspecified"`.
    pub fn version(&self) -> Option<&str> {
        self.version
            .as_deref()
            .filter(|version| *version != DEFAULT_VERSION)
    }
}

/// Basic reporting settings and utilities for a project.
///
/// Tasks producing reports should ask this extension where to put them via
/// [`ReportingExtension::file`], at the time they write, since the base
/// directory can change while the build is being configured.
#[derive(Clone, Debug)]
pub struct ReportingExtension {
    layout: ProjectLayout,
    base_directory: Option<PathBuf>,
    reports: ReportContainer,
}

impl ReportingExtension {
    /// The name of this extension.
    pub const NAME: &'static str = "reporting";

    /// Default name of the reports base directory, relative to the build
    /// directory.
    pub const DEFAULT_REPORTS_DIR_NAME: &'static str = "reports";

    pub fn new(layout: ProjectLayout) -> Self {
        ReportingExtension {
            layout,
            base_directory: None,
            reports: ReportContainer::new(),
        }
    }

    pub fn layout(&self) -> &ProjectLayout {
        &self.layout
    }

    /// Move the build directory. A conventional base directory follows it.
    pub fn set_build_dir(&mut self, build_dir: impl AsRef<Path>) {
        self.layout.set_build_dir(build_dir);
    }

    /// The base directory for all reports.
    ///
    /// The explicitly set directory if there is one, otherwise
    /// `<build-dir>/reports` for the build directory as it is now.
    pub fn base_directory(&self) -> PathBuf {
        match &self.base_directory {
            Some(dir) => dir.clone(),
            None => self.layout.build_dir.join(Self::DEFAULT_REPORTS_DIR_NAME),
        }
    }

    /// Set the base directory. Relative paths are resolved against the
    /// project directory.
    pub fn set_base_directory(&mut self, dir: impl AsRef<Path>) {
        let resolved = resolve(&self.layout.project_dir, dir.as_ref());
        tracing::debug!(base_directory = %resolved.display(), "reports base directory set");
        self.base_directory = Some(resolved);
    }

    /// Go back to the conventional base directory.
    pub fn reset_base_directory(&mut self) {
        self.base_directory = None;
    }

    /// Check if the base directory was set explicitly.
    pub fn has_explicit_base_directory(&self) -> bool {
        self.base_directory.is_some()
    }

    /// Resolve `path` against the current base directory.
    ///
    /// Absolute paths are returned as-is. `.` and `..` are removed
    /// lexically; the filesystem is not consulted.
    pub fn file(&self, path: impl AsRef<Path>) -> PathBuf {
        resolve(&self.base_directory(), path.as_ref())
    }

    /// Title for generated API documentation: `"<name> API"`, or
    /// `"<name> <version> API"` when the project has a version.
    pub fn api_doc_title(&self) -> String {
        match self.layout.version() {
            Some(version) => format!("{} {version} API", self.layout.name),
            None => format!("{} API", self.layout.name),
        }
    }

    pub fn reports(&self) -> &ReportContainer {
        &self.reports
    }

    pub fn reports_mut(&mut self) -> &mut ReportContainer {
        &mut self.reports
    }
}

/// Resolve `path` against `base` and normalize the result.
fn resolve(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        normalize(path)
    } else {
        normalize(&base.join(path))
    }
}

/// Lexically remove `.` and `..` components.
///
/// `..` never climbs above the root or a path prefix; on a relative path
/// with nothing left to pop it is kept.
fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match normalized.components().next_back() {
                Some(Component::Normal(_)) => {
                    normalized.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                Some(Component::ParentDir | Component::CurDir) | None => {
                    normalized.push(component);
                }
            },
            Component::Prefix(_) | Component::RootDir | Component::Normal(_) => {
                normalized.push(component);
            }
        }
    }
    normalized
}

#[cfg(test)]
mod tests;
