//! Problem locations: where a problem was detected.
//!
//! Locations are either file-scoped (a path, optionally refined to a line
//! or a byte range) or describe something that isn't a file, like the task
//! or plugin that reported the problem.

use std::fmt;

/// A whole-file location.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct FileLocation {
    pub path: String,
}

/// A position within a file, by line.
///
/// `line` and `column` are 1-based. `length` is the number of characters
/// covered, starting at the column.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct LineInFileLocation {
    pub path: String,
    pub line: u32,
    pub column: Option<u32>,
    pub length: Option<u32>,
}

/// A byte range within a file.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct OffsetInFileLocation {
    pub path: String,
    pub offset: u32,
    pub length: u32,
}

/// Where a problem was detected.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum ProblemLocation {
    /// The task that reported the problem, by path (`:app:compileJava`).
    TaskPath(String),
    /// The plugin that reported the problem, by id.
    PluginId(String),
    File(FileLocation),
    LineInFile(LineInFileLocation),
    OffsetInFile(OffsetInFileLocation),
}

impl ProblemLocation {
    /// Create a whole-file location.
    pub fn file(path: impl Into<String>) -> Self {
        ProblemLocation::File(FileLocation { path: path.into() })
    }

    /// Create a line location without column or length.
    pub fn line_in_file(path: impl Into<String>, line: u32) -> Self {
        ProblemLocation::LineInFile(LineInFileLocation {
            path: path.into(),
            line,
            column: None,
            length: None,
        })
    }

    /// Create a line location with column and optional length.
    pub fn line_column_in_file(
        path: impl Into<String>,
        line: u32,
        column: u32,
        length: Option<u32>,
    ) -> Self {
        ProblemLocation::LineInFile(LineInFileLocation {
            path: path.into(),
            line,
            column: Some(column),
            length,
        })
    }

    /// Create a byte-range location.
    pub fn offset_in_file(path: impl Into<String>, offset: u32, length: u32) -> Self {
        ProblemLocation::OffsetInFile(OffsetInFileLocation {
            path: path.into(),
            offset,
            length,
        })
    }

    pub fn task_path(path: impl Into<String>) -> Self {
        ProblemLocation::TaskPath(path.into())
    }

    pub fn plugin_id(id: impl Into<String>) -> Self {
        ProblemLocation::PluginId(id.into())
    }

    /// The file path, for every file-scoped variant.
    ///
    /// Line and offset locations are refinements of a file location and
    /// share its path.
    pub fn path(&self) -> Option<&str> {
        match self {
            ProblemLocation::File(FileLocation { path })
            | ProblemLocation::LineInFile(LineInFileLocation { path, .. })
            | ProblemLocation::OffsetInFile(OffsetInFileLocation { path, .. }) => Some(path.as_str()),
            ProblemLocation::TaskPath(_) | ProblemLocation::PluginId(_) => None,
        }
    }

    /// Check if this location points into a file.
    pub fn is_file(&self) -> bool {
        self.path().is_some()
    }
}

impl fmt::Display for ProblemLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProblemLocation::TaskPath(path) => write!(f, "task '{path}'"),
            ProblemLocation::PluginId(id) => write!(f, "plugin '{id}'"),
            ProblemLocation::File(loc) => write!(f, "{}", loc.path),
            ProblemLocation::LineInFile(loc) => {
                write!(f, "{}:{}", loc.path, loc.line)?;
                if let Some(column) = loc.column {
                    write!(f, ":{column}")?;
                }
                Ok(())
            }
            ProblemLocation::OffsetInFile(loc) => {
                write!(f, "{}@{}+{}", loc.path, loc.offset, loc.length)
            }
        }
    }
}
