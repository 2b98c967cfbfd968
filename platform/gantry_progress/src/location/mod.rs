//! Views of problem locations.
//!
//! Every internal location maps to one of three stable shapes. The mapping
//! picks the most specific shape a location qualifies for:
//! 1. line-in-file: path, line, column, length
//! 2. any other file location: path
//! 3. anything else: display name only
//!
//! New internal variants must be slotted into one of these shapes; the
//! external shape does not grow with the internal model.

use gantry_problems::{FileLocation, OffsetInFileLocation, ProblemLocation};
use serde::Serialize;

/// External view of a [`ProblemLocation`].
///
/// Every view has a display name: the location's string form.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind")]
pub enum LocationView<'p> {
    #[serde(rename = "generic", rename_all = "camelCase")]
    Generic { display_name: String },
    #[serde(rename = "file", rename_all = "camelCase")]
    File { display_name: String, path: &'p str },
    #[serde(rename = "lineInFile", rename_all = "camelCase")]
    LineInFile {
        display_name: String,
        path: &'p str,
        line: u32,
        #[serde(skip_serializing_if = "Option::is_none")]
        column: Option<u32>,
        #[serde(skip_serializing_if = "Option::is_none")]
        length: Option<u32>,
    },
}

impl<'p> LocationView<'p> {
    pub(crate) fn new(location: &'p ProblemLocation) -> Self {
        let display_name = location.to_string();
        match location {
            ProblemLocation::LineInFile(line) => LocationView::LineInFile {
                display_name,
                path: line.path.as_str(),
                line: line.line,
                column: line.column,
                length: line.length,
            },
            ProblemLocation::File(FileLocation { path })
            | ProblemLocation::OffsetInFile(OffsetInFileLocation { path, .. }) => {
                LocationView::File {
                    display_name,
                    path: path.as_str(),
                }
            }
            ProblemLocation::TaskPath(_) | ProblemLocation::PluginId(_) => {
                LocationView::Generic { display_name }
            }
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            LocationView::Generic { display_name }
            | LocationView::File { display_name, .. }
            | LocationView::LineInFile { display_name, .. } => display_name.as_str(),
        }
    }

    /// The file path; `None` for generic locations.
    pub fn path(&self) -> Option<&'p str> {
        match self {
            LocationView::File { path, .. } | LocationView::LineInFile { path, .. } => Some(*path),
            LocationView::Generic { .. } => None,
        }
    }

    /// The 1-based line; only line-in-file locations have one.
    pub fn line(&self) -> Option<u32> {
        match self {
            LocationView::LineInFile { line, .. } => Some(*line),
            LocationView::Generic { .. } | LocationView::File { .. } => None,
        }
    }

    pub fn column(&self) -> Option<u32> {
        match self {
            LocationView::LineInFile { column, .. } => *column,
            LocationView::Generic { .. } | LocationView::File { .. } => None,
        }
    }

    pub fn length(&self) -> Option<u32> {
        match self {
            LocationView::LineInFile { length, .. } => *length,
            LocationView::Generic { .. } | LocationView::File { .. } => None,
        }
    }
}
