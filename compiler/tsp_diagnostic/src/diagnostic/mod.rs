//! Core diagnostic types.
//!
//! Defines [`Diagnostic`], [`Severity`], and [`DiagnosticTarget`], the values
//! every analysis pass reports problems with.

use std::fmt;

use tsp_ir::{NodeId, SourceLocation, SymbolId, TypeId};

use crate::DiagnosticCode;

/// Severity level for diagnostics.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// What a diagnostic points at.
///
/// Different passes produce different kinds of results (nodes while parsing,
/// symbols while binding, types while checking), and any of them can be the
/// subject of a diagnostic. A diagnostic with no target at all uses `None`
/// wherever a target is optional.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum DiagnosticTarget {
    /// An already-resolved location.
    Location(SourceLocation),
    Symbol(SymbolId),
    Node(NodeId),
    Type(TypeId),
}

impl From<SourceLocation> for DiagnosticTarget {
    fn from(location: SourceLocation) -> Self {
        DiagnosticTarget::Location(location)
    }
}

impl From<SymbolId> for DiagnosticTarget {
    fn from(id: SymbolId) -> Self {
        DiagnosticTarget::Symbol(id)
    }
}

impl From<NodeId> for DiagnosticTarget {
    fn from(id: NodeId) -> Self {
        DiagnosticTarget::Node(id)
    }
}

impl From<TypeId> for DiagnosticTarget {
    fn from(id: TypeId) -> Self {
        DiagnosticTarget::Type(id)
    }
}

/// A reportable, non-fatal problem in the code being compiled.
#[derive(Clone, Eq, PartialEq, Debug)]
#[must_use = "diagnostics should be reported or returned, not silently dropped"]
pub struct Diagnostic {
    pub code: DiagnosticCode,
    pub severity: Severity,
    pub message: String,
    /// `None` when the problem has no meaningful source position.
    pub target: Option<DiagnosticTarget>,
}

impl Diagnostic {
    fn new_with_severity(code: DiagnosticCode, severity: Severity) -> Self {
        Diagnostic {
            code,
            severity,
            message: String::new(),
            target: None,
        }
    }

    /// Create a new error diagnostic.
    #[cold]
    pub fn error(code: impl Into<DiagnosticCode>) -> Self {
        Self::new_with_severity(code.into(), Severity::Error)
    }

    /// Create a new warning diagnostic.
    #[cold]
    pub fn warning(code: impl Into<DiagnosticCode>) -> Self {
        Self::new_with_severity(code.into(), Severity::Warning)
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn with_target(mut self, target: impl Into<DiagnosticTarget>) -> Self {
        self.target = Some(target.into());
        self
    }

    /// Replace the target, including clearing it with `None`.
    pub fn with_optional_target(mut self, target: Option<DiagnosticTarget>) -> Self {
        self.target = target;
        self
    }

    pub fn is_error(&self) -> bool {
        matches!(self.severity, Severity::Error)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.severity, self.code, self.message)
    }
}

#[cfg(test)]
mod tests;
