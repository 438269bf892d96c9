//! Diagnostic collection and source location resolution.
//!
//! Three kinds of failure are kept apart:
//! - **Diagnostics** describe problems in the code being compiled. They are
//!   values, gathered through a [`DiagnosticCollector`] and never thrown.
//! - **Internal invariant violations** are compiler bugs. [`compiler_assert`]
//!   panics with the best source position it can find.
//! - **Projection failures** ([`ProjectionError`]) are returned as `Err` to
//!   whichever caller can turn them into a diagnostic.
//!
//! Every diagnostic points at a [`DiagnosticTarget`]: a resolved location, a
//! symbol, a syntax node, or a semantic type. [`get_source_location`] turns
//! any of them into a concrete span, falling back to a synthetic location
//! rather than failing.
//!
//! ```text
//! fn check_model(model: &SemanticModel, id: NodeId) -> DiagnosticResult<Checked> {
//!     let mut diagnostics = DiagnosticCollector::new();
//!     let members = diagnostics.pipe(check_members(model, id));
//!     if members.is_empty() {
//!         diagnostics.add(Diagnostic::warning(code).with_target(id));
//!     }
//!     diagnostics.wrap(Checked { members })
//! }
//! ```

mod assertion;
mod code;
mod collector;
mod deprecation;
mod diagnostic;
mod location;
mod projection;
pub mod sink;
pub mod verbose;

pub use assertion::{compiler_assert, compiler_bug, compiler_bug_at};
pub use code::DiagnosticCode;
pub use collector::{ignore_diagnostics, DiagnosticCollector, DiagnosticResult, ReportDiagnostic};
pub use deprecation::report_deprecated;
pub use diagnostic::{Diagnostic, DiagnosticTarget, Severity};
pub use location::{
    get_source_location, try_source_location, LocationError, SourceLocationOptions,
    UNBOUND_NODE_LOCATION,
};
pub use projection::{assert_type, ProjectionError};
pub use sink::{format_diagnostic, log_diagnostics, LogEntry, LogLevel, LogSink};
pub use verbose::{log_verbose_test_output, log_verbose_test_output_with};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Only installs a subscriber when `RUST_LOG`
/// is set, e.g. `RUST_LOG=tsp_diagnostic=debug`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            // Another subscriber may already be installed by the host.
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
        }
    });
}
