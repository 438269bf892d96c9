//! Deprecation warnings.

use crate::{Diagnostic, DiagnosticCode, DiagnosticTarget, ReportDiagnostic};

/// Report a `deprecated` warning at `target`.
///
/// `message` is the deprecation notice attached to the declaration; it is
/// prefixed with `Deprecated: `.
pub fn report_deprecated<R: ReportDiagnostic + ?Sized>(
    reporter: &mut R,
    message: &str,
    target: Option<DiagnosticTarget>,
) {
    reporter.report_diagnostic(
        Diagnostic::warning(DiagnosticCode::DEPRECATED)
            .with_message(format!("Deprecated: {message}"))
            .with_optional_target(target),
    );
}
