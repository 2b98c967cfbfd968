//! Views of problem definitions, groups, and documentation links.

use gantry_problems::{DocLink, ProblemDefinition, ProblemGroup, Severity};
use serde::Serialize;

/// Upper bound on the number of groups walked from a leaf to its root.
///
/// Real taxonomies are a handful of levels deep. The walk stops here
/// rather than trusting the chain to end.
pub const MAX_GROUP_DEPTH: usize = 64;

/// One group of a problem's classification chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemGroupView<'p> {
    pub id: &'p str,
    pub display_name: &'p str,
}

impl<'p> ProblemGroupView<'p> {
    fn new(group: &'p ProblemGroup) -> Self {
        ProblemGroupView {
            id: group.id(),
            display_name: group.display_name(),
        }
    }
}

/// A documentation link; either part may be absent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentationLinkView<'p> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<&'p str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consult_documentation_message: Option<&'p str>,
}

impl<'p> DocumentationLinkView<'p> {
    fn new(link: &'p DocLink) -> Self {
        DocumentationLinkView {
            url: link.url(),
            consult_documentation_message: link.consult_documentation_message(),
        }
    }
}

/// External view of a [`ProblemDefinition`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemDefinitionView<'p> {
    /// The group chain, most specific first: `id[0]` is the problem's own
    /// group and the last entry is the root.
    pub id: Vec<ProblemGroupView<'p>>,
    /// Symbolic severity name (`"ERROR"`, `"WARNING"`, `"ADVICE"`).
    pub severity: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documentation_link: Option<DocumentationLinkView<'p>>,
}

impl<'p> ProblemDefinitionView<'p> {
    pub(crate) fn new(definition: &'p ProblemDefinition) -> Self {
        ProblemDefinitionView {
            id: group_chain(definition.id()),
            severity: definition.severity().name(),
            documentation_link: definition.documentation_link().map(DocumentationLinkView::new),
        }
    }

    /// The problem's own group.
    pub fn most_specific_group(&self) -> Option<&ProblemGroupView<'p>> {
        self.id.first()
    }

    /// The root of the chain.
    pub fn root_group(&self) -> Option<&ProblemGroupView<'p>> {
        self.id.last()
    }

    /// Group ids joined root-first, e.g. `compilation:java`.
    pub fn group_path(&self) -> String {
        let ids: Vec<&str> = self.id.iter().rev().map(|group| group.id).collect();
        ids.join(":")
    }

    /// Parse the severity name back into a [`Severity`].
    pub fn severity_level(&self) -> Option<Severity> {
        Severity::from_name(self.severity)
    }
}

/// Walk from `leaf` up through its parents.
fn group_chain(leaf: &ProblemGroup) -> Vec<ProblemGroupView<'_>> {
    leaf.ancestry()
        .take(MAX_GROUP_DEPTH)
        .map(ProblemGroupView::new)
        .collect()
}
