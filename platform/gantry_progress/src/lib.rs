//! External view of build problems.
//!
//! Converts the internal [`gantry_problems::Problem`] model into
//! [`ProblemProgressDetails`]: a read-only shape that reporting sinks are
//! written against. The internal model is free to change; the view is not.
//!
//! Conversion is a pure projection. [`project`] borrows the problem,
//! allocates the view, and touches nothing else:
//!
//! ```text
//! let details = project(&problem);
//! details.problem_definition.id[0]     // the problem's own group
//! details.problem_definition.severity  // "WARNING"
//! details.locations                    // generic / file / line-in-file views
//! ```
//!
//! Emitters in [`emitter`] render views as JSON or terminal text.

mod definition;
mod details;
pub mod emitter;
mod failure;
mod location;

use std::sync::Once;

pub use definition::{
    DocumentationLinkView, ProblemDefinitionView, ProblemGroupView, MAX_GROUP_DEPTH,
};
pub use details::{project, ProblemProgressDetails};
pub use failure::FailureView;
pub use location::LocationView;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=gantry_reporting=debug` or `RUST_LOG=debug`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
