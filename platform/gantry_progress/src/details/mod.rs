//! The projected problem.

use gantry_problems::Problem;
use serde::Serialize;

use crate::{FailureView, LocationView, ProblemDefinitionView};

/// External, read-only view of one [`Problem`].
///
/// Borrows from the problem it was projected from and cannot outlive it.
/// Absent optional parts of the problem stay absent here (and are omitted
/// when serialized).
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemProgressDetails<'p> {
    pub problem_definition: ProblemDefinitionView<'p>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contextual_label: Option<&'p str>,
    /// In the order they were added, duplicates included.
    pub solutions: &'p [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<&'p str>,
    pub locations: Vec<LocationView<'p>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<FailureView<'p>>,
}

/// Project `problem` into its external view.
///
/// Pure: reads the problem, allocates the view, and has no other effect.
/// Projecting the same problem twice gives equal views.
pub fn project(problem: &Problem) -> ProblemProgressDetails<'_> {
    ProblemProgressDetails {
        problem_definition: ProblemDefinitionView::new(problem.definition()),
        contextual_label: problem.contextual_label(),
        solutions: problem.solutions(),
        details: problem.details(),
        locations: problem.locations().iter().map(LocationView::new).collect(),
        failure: problem.exception().map(FailureView::new),
    }
}

impl<'p> From<&'p Problem> for ProblemProgressDetails<'p> {
    fn from(problem: &'p Problem) -> Self {
        project(problem)
    }
}

impl ProblemProgressDetails<'_> {
    /// A one-line summary: the contextual label if present, otherwise the
    /// display name of the problem's own group.
    pub fn headline(&self) -> &str {
        self.contextual_label
            .or_else(|| {
                self.problem_definition
                    .most_specific_group()
                    .map(|group| group.display_name)
            })
            .unwrap_or_default()
    }
}
