//! Core problem groups.
//!
//! The built-in taxonomy shared by every part of the build. Groups are
//! created on first use and live for the rest of the process, so the
//! returned `Arc`s all point at the same nodes.
//!
//! ```text
//! generic
//! compilation
//! └── java
//! deprecation
//! validation
//! ├── property-validation
//! └── type-validation
//! task-selection
//! plugin-application
//! ```

use std::sync::{Arc, OnceLock};

use crate::ProblemGroup;

struct CoreGroups {
    generic: Arc<ProblemGroup>,
    compilation: Arc<ProblemGroup>,
    compilation_java: Arc<ProblemGroup>,
    deprecation: Arc<ProblemGroup>,
    validation: Arc<ProblemGroup>,
    property_validation: Arc<ProblemGroup>,
    type_validation: Arc<ProblemGroup>,
    task_selection: Arc<ProblemGroup>,
    plugin_application: Arc<ProblemGroup>,
}

impl CoreGroups {
    fn build() -> Self {
        let compilation = ProblemGroup::root("compilation", "Compilation");
        let validation = ProblemGroup::root("validation", "Validation");
        CoreGroups {
            generic: ProblemGroup::root("generic", "Generic"),
            compilation_java: ProblemGroup::child("java", "Java compilation", &compilation),
            compilation,
            deprecation: ProblemGroup::root("deprecation", "Deprecation"),
            property_validation: ProblemGroup::child(
                "property-validation",
                "Property validation problems",
                &validation,
            ),
            type_validation: ProblemGroup::child(
                "type-validation",
                "Type validation",
                &validation,
            ),
            validation,
            task_selection: ProblemGroup::root("task-selection", "Task selection"),
            plugin_application: ProblemGroup::root("plugin-application", "Plugin application"),
        }
    }
}

static CORE_GROUPS: OnceLock<CoreGroups> = OnceLock::new();

fn core() -> &'static CoreGroups {
    CORE_GROUPS.get_or_init(CoreGroups::build)
}

pub fn generic() -> Arc<ProblemGroup> {
    Arc::clone(&core().generic)
}

pub fn compilation() -> Arc<ProblemGroup> {
    Arc::clone(&core().compilation)
}

/// Java compilation, under [`compilation`].
pub fn compilation_java() -> Arc<ProblemGroup> {
    Arc::clone(&core().compilation_java)
}

pub fn deprecation() -> Arc<ProblemGroup> {
    Arc::clone(&core().deprecation)
}

pub fn validation() -> Arc<ProblemGroup> {
    Arc::clone(&core().validation)
}

/// Task property validation, under [`validation`].
pub fn property_validation() -> Arc<ProblemGroup> {
    Arc::clone(&core().property_validation)
}

/// Type validation, under [`validation`].
pub fn type_validation() -> Arc<ProblemGroup> {
    Arc::clone(&core().type_validation)
}

pub fn task_selection() -> Arc<ProblemGroup> {
    Arc::clone(&core().task_selection)
}

pub fn plugin_application() -> Arc<ProblemGroup> {
    Arc::clone(&core().plugin_application)
}
