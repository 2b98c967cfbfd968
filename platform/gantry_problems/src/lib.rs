//! Problem model for build diagnostics.
//!
//! A [`Problem`] is one detected issue (an error, warning, or piece of
//! advice) raised while configuring or running a build. Every problem has:
//! - A [`ProblemDefinition`]: which kind of problem it is (a [`ProblemGroup`]
//!   in a fixed taxonomy), how severe it is, and where it is documented
//! - An optional contextual label (what went wrong, here)
//! - Solutions (how to fix it)
//! - Optional free-text details
//! - [`ProblemLocation`]s (where it was detected)
//! - An optional [`Failure`] (the error that caused it)
//!
//! All types are immutable once built. Groups are shared through `Arc`, so
//! a taxonomy is built once and referenced by any number of definitions.
//!
//! ```text
//! let java = taxonomy::compilation_java();
//! let problem = Problem::new(ProblemDefinition::new(java, Severity::Error))
//!     .with_contextual_label("cannot find symbol")
//!     .with_location(ProblemLocation::line_in_file("src/Foo.java", 10))
//!     .with_solution("import the missing class");
//! ```

mod definition;
mod group;
mod location;
mod problem;
pub mod taxonomy;

pub use definition::{DocLink, ProblemDefinition, Severity};
pub use group::{Ancestry, ProblemGroup};
pub use location::{FileLocation, LineInFileLocation, OffsetInFileLocation, ProblemLocation};
pub use problem::{Failure, Problem};
