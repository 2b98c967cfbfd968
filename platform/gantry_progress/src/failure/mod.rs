//! View of the failure attached to a problem.

use std::error::Error;
use std::fmt;
use std::sync::Arc;

use gantry_problems::Failure;
use serde::ser::{Serialize, SerializeStruct, Serializer};

/// The problem's failure, exposed by reference.
///
/// Nothing is copied or summarized: [`FailureView::get`] returns the very
/// object attached to the problem, so callers can walk its cause chain or
/// downcast it. Two views are equal when they refer to the same failure.
#[derive(Clone, Copy, Debug)]
pub struct FailureView<'p> {
    failure: &'p Failure,
}

impl<'p> FailureView<'p> {
    pub(crate) fn new(failure: &'p Failure) -> Self {
        FailureView { failure }
    }

    /// The failure itself.
    pub fn get(&self) -> &'p Failure {
        self.failure
    }

    /// The top-level error message.
    pub fn message(&self) -> String {
        self.failure.to_string()
    }

    /// The `source()` chain below the top-level error, outermost first.
    pub fn causes(&self) -> impl Iterator<Item = &'p (dyn Error + 'static)> {
        let failure: &'p (dyn Error + 'static) = &**self.failure;
        std::iter::successors(failure.source(), |&cause| cause.source())
    }
}

impl PartialEq for FailureView<'_> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(self.failure, other.failure)
    }
}

impl Eq for FailureView<'_> {}

impl fmt::Display for FailureView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.failure)
    }
}

/// Serialized as `{ "message": ..., "causes": [...] }`.
impl Serialize for FailureView<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let causes: Vec<String> = self.causes().map(ToString::to_string).collect();
        let mut state = serializer.serialize_struct("Failure", 2)?;
        state.serialize_field("message", &self.message())?;
        state.serialize_field("causes", &causes)?;
        state.end()
    }
}

#[cfg(test)]
mod tests;
