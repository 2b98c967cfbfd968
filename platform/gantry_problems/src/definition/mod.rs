//! Problem definitions: what kind of problem, how severe, where documented.

use std::fmt;
use std::sync::Arc;

use crate::ProblemGroup;

/// Severity level for problems.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Severity {
    /// A suggestion; the build is unaffected.
    Advice,
    Warning,
    Error,
}

impl Severity {
    /// All severities, least severe first.
    pub const ALL: [Severity; 3] = [Severity::Advice, Severity::Warning, Severity::Error];

    /// Symbolic name, as used by external consumers (`"WARNING"`).
    pub fn name(self) -> &'static str {
        match self {
            Severity::Advice => "ADVICE",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
        }
    }

    /// Parse a symbolic name produced by [`Severity::name`].
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|severity| severity.name() == name)
    }

    /// Check if this severity fails the build.
    pub fn is_error(self) -> bool {
        matches!(self, Severity::Error)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Advice => write!(f, "advice"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A link to documentation about a problem.
///
/// Both parts are optional: a link may carry only a URL, only a message
/// telling the user where to look, or both.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct DocLink {
    url: Option<String>,
    consult_documentation_message: Option<String>,
}

impl DocLink {
    /// Create a link pointing at `url`.
    pub fn new(url: impl Into<String>) -> Self {
        DocLink {
            url: Some(url.into()),
            consult_documentation_message: None,
        }
    }

    /// Create a link that only carries a "consult the documentation" message.
    pub fn message(message: impl Into<String>) -> Self {
        DocLink {
            url: None,
            consult_documentation_message: Some(message.into()),
        }
    }

    /// Attach a consult message to this link.
    #[must_use]
    pub fn with_consult_message(mut self, message: impl Into<String>) -> Self {
        self.consult_documentation_message = Some(message.into());
        self
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn consult_documentation_message(&self) -> Option<&str> {
        self.consult_documentation_message.as_deref()
    }
}

/// Identifies a kind of problem.
///
/// The `id` is the most specific [`ProblemGroup`] the problem belongs to;
/// its parent chain places it in the taxonomy.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ProblemDefinition {
    id: Arc<ProblemGroup>,
    severity: Severity,
    documentation_link: Option<DocLink>,
}

impl ProblemDefinition {
    /// Create a definition without documentation.
    pub fn new(id: Arc<ProblemGroup>, severity: Severity) -> Self {
        ProblemDefinition {
            id,
            severity,
            documentation_link: None,
        }
    }

    /// Attach a documentation link.
    #[must_use]
    pub fn with_documentation(mut self, link: DocLink) -> Self {
        self.documentation_link = Some(link);
        self
    }

    /// The leaf group identifying this kind of problem.
    pub fn id(&self) -> &ProblemGroup {
        &self.id
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn documentation_link(&self) -> Option<&DocLink> {
        self.documentation_link.as_ref()
    }
}
