//! The problem record.

use std::error::Error;
use std::sync::Arc;

use crate::{ProblemDefinition, ProblemLocation, Severity};

/// The error that caused a problem.
///
/// Shared rather than owned so the same failure can be attached to a
/// problem and still be inspected (cause chain, downcasts) by whoever
/// receives it.
pub type Failure = Arc<dyn Error + Send + Sync + 'static>;

/// One detected issue.
///
/// Built with [`Problem::new`] and the `with_*` methods; read-only after.
#[derive(Clone, Debug)]
#[must_use = "problems should be reported, not silently dropped"]
pub struct Problem {
    definition: ProblemDefinition,
    contextual_label: Option<String>,
    solutions: Vec<String>,
    details: Option<String>,
    locations: Vec<ProblemLocation>,
    exception: Option<Failure>,
}

impl Problem {
    /// Create a problem with no label, solutions, details, locations, or failure.
    pub fn new(definition: ProblemDefinition) -> Self {
        Problem {
            definition,
            contextual_label: None,
            solutions: Vec::new(),
            details: None,
            locations: Vec::new(),
            exception: None,
        }
    }

    /// Set the short, context-specific description.
    pub fn with_contextual_label(mut self, label: impl Into<String>) -> Self {
        self.contextual_label = Some(label.into());
        self
    }

    /// Add a suggested solution. Order is kept.
    pub fn with_solution(mut self, solution: impl Into<String>) -> Self {
        self.solutions.push(solution.into());
        self
    }

    /// Set the long-form details.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Add a location. Order is kept.
    pub fn with_location(mut self, location: ProblemLocation) -> Self {
        self.locations.push(location);
        self
    }

    /// Attach the error that caused this problem.
    pub fn with_failure<E>(self, error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        self.with_shared_failure(Arc::new(error))
    }

    /// Attach an already-shared failure.
    pub fn with_shared_failure(mut self, failure: Failure) -> Self {
        self.exception = Some(failure);
        self
    }

    pub fn definition(&self) -> &ProblemDefinition {
        &self.definition
    }

    pub fn contextual_label(&self) -> Option<&str> {
        self.contextual_label.as_deref()
    }

    pub fn solutions(&self) -> &[String] {
        &self.solutions
    }

    pub fn details(&self) -> Option<&str> {
        self.details.as_deref()
    }

    pub fn locations(&self) -> &[ProblemLocation] {
        &self.locations
    }

    pub fn exception(&self) -> Option<&Failure> {
        self.exception.as_ref()
    }

    /// Shorthand for the definition's severity.
    pub fn severity(&self) -> Severity {
        self.definition.severity()
    }
}
