//! Problem groups: nodes of the problem taxonomy.

use std::fmt;
use std::sync::Arc;

/// A node in the problem classification taxonomy.
///
/// Groups form a singly-linked chain towards a root group with no parent.
/// The parent is shared, not owned, so many child groups (and many problem
/// definitions) can point at the same ancestor. Since a group cannot be
/// modified after construction, a chain can never become cyclic.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ProblemGroup {
    id: String,
    display_name: String,
    parent: Option<Arc<ProblemGroup>>,
}

impl ProblemGroup {
    /// Create a root group (no parent).
    pub fn root(id: impl Into<String>, display_name: impl Into<String>) -> Arc<Self> {
        Arc::new(ProblemGroup {
            id: id.into(),
            display_name: display_name.into(),
            parent: None,
        })
    }

    /// Create a group nested under `parent`.
    pub fn child(
        id: impl Into<String>,
        display_name: impl Into<String>,
        parent: &Arc<ProblemGroup>,
    ) -> Arc<Self> {
        Arc::new(ProblemGroup {
            id: id.into(),
            display_name: display_name.into(),
            parent: Some(Arc::clone(parent)),
        })
    }

    /// Machine-readable identifier, unique among siblings.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Human-readable name.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// The enclosing group, or `None` for a root.
    pub fn parent(&self) -> Option<&ProblemGroup> {
        self.parent.as_deref()
    }

    /// Check if this group has no parent.
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Iterate this group and its ancestors, most specific first.
    ///
    /// The first item is `self`, the last is the root.
    pub fn ancestry(&self) -> Ancestry<'_> {
        Ancestry {
            current: Some(self),
        }
    }

    /// Number of groups in the chain from this group up to the root.
    pub fn depth(&self) -> usize {
        self.ancestry().count()
    }
}

/// Renders the chain root-first as `root:child:leaf`.
impl fmt::Display for ProblemGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(parent) = self.parent() {
            write!(f, "{parent}:")?;
        }
        write!(f, "{}", self.id)
    }
}

/// Iterator over a group and its ancestors, leaf first.
#[derive(Clone, Debug)]
pub struct Ancestry<'g> {
    current: Option<&'g ProblemGroup>,
}

impl<'g> Iterator for Ancestry<'g> {
    type Item = &'g ProblemGroup;

    fn next(&mut self) -> Option<Self::Item> {
        let group = self.current?;
        self.current = group.parent();
        Some(group)
    }
}

impl std::iter::FusedIterator for Ancestry<'_> {}
