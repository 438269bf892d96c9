//! Diagnostic accumulation for analysis passes.
//!
//! Passes that can produce partial results alongside non-fatal problems
//! return a [`DiagnosticResult`]. Inside such a pass a
//! [`DiagnosticCollector`] gathers diagnostics from nested calls:
//!
//! - `add` records a diagnostic found directly
//! - `pipe` unwraps a helper's result, keeping its diagnostics
//! - `wrap` packages the pass's own value with everything collected
//!
//! Order is preserved throughout, so diagnostics come out in the order the
//! nested computations ran (depth-first, left to right).

use crate::Diagnostic;

/// A value together with the diagnostics produced while computing it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[must_use = "diagnostics should be reported or explicitly ignored"]
pub struct DiagnosticResult<T> {
    pub value: T,
    pub diagnostics: Vec<Diagnostic>,
}

impl<T> DiagnosticResult<T> {
    pub fn new(value: T, diagnostics: Vec<Diagnostic>) -> Self {
        DiagnosticResult { value, diagnostics }
    }

    /// A result with no diagnostics.
    pub fn ok(value: T) -> Self {
        DiagnosticResult {
            value,
            diagnostics: Vec::new(),
        }
    }

    pub fn into_parts(self) -> (T, Vec<Diagnostic>) {
        (self.value, self.diagnostics)
    }

    /// Transform the value, keeping the diagnostics.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> DiagnosticResult<U> {
        DiagnosticResult {
            value: f(self.value),
            diagnostics: self.diagnostics,
        }
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }
}

impl<T> From<(T, Vec<Diagnostic>)> for DiagnosticResult<T> {
    fn from((value, diagnostics): (T, Vec<Diagnostic>)) -> Self {
        DiagnosticResult { value, diagnostics }
    }
}

/// Drop the diagnostics of a result and keep only its value.
///
/// For best-effort queries where the caller does not care about non-fatal
/// problems in the sub-computation.
pub fn ignore_diagnostics<T>(result: DiagnosticResult<T>) -> T {
    result.value
}

/// Sink for individually reported diagnostics.
pub trait ReportDiagnostic {
    fn report_diagnostic(&mut self, diagnostic: Diagnostic);
}

impl ReportDiagnostic for Vec<Diagnostic> {
    fn report_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

/// Ordered accumulator of diagnostics, owned by one pass.
///
/// Independent passes (for example per-file work) each use their own
/// collector; their results are merged afterwards with [`pipe`] or
/// [`absorb`], which append in order.
///
/// [`pipe`]: DiagnosticCollector::pipe
/// [`absorb`]: DiagnosticCollector::absorb
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a diagnostic. Insertion order is report order.
    pub fn add(&mut self, diagnostic: Diagnostic) {
        tracing::trace!(code = %diagnostic.code, severity = %diagnostic.severity, "diagnostic collected");
        self.diagnostics.push(diagnostic);
    }

    /// Keep the diagnostics of `result` and return its value.
    pub fn pipe<T>(&mut self, result: DiagnosticResult<T>) -> T {
        let (value, diagnostics) = result.into_parts();
        self.diagnostics.extend(diagnostics);
        value
    }

    /// Package `value` with the diagnostics collected so far.
    ///
    /// The collected diagnostics are moved into the result, not copied.
    pub fn wrap<T>(self, value: T) -> DiagnosticResult<T> {
        DiagnosticResult {
            value,
            diagnostics: self.diagnostics,
        }
    }

    /// Append everything another collector gathered, in its order.
    pub fn absorb(&mut self, other: DiagnosticCollector) {
        self.diagnostics.extend(other.diagnostics);
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }
}

impl ReportDiagnostic for DiagnosticCollector {
    fn report_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.add(diagnostic);
    }
}

impl Extend<Diagnostic> for DiagnosticCollector {
    fn extend<I: IntoIterator<Item = Diagnostic>>(&mut self, iter: I) {
        self.diagnostics.extend(iter);
    }
}

#[cfg(test)]
mod tests;
