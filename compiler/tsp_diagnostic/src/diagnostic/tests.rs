use super::*;
use std::sync::Arc;
use tsp_ir::{SourceFile, Span};

#[test]
fn test_diagnostic_builder() {
    let diag = Diagnostic::error("duplicate-symbol")
        .with_message("Duplicate name: \"Foo\"")
        .with_target(NodeId::new(3));

    assert_eq!(diag.code, DiagnosticCode::from("duplicate-symbol"));
    assert_eq!(diag.message, "Duplicate name: \"Foo\"");
    assert!(diag.is_error());
    assert_eq!(diag.target, Some(DiagnosticTarget::Node(NodeId::new(3))));
}

#[test]
fn test_warning_is_not_error() {
    let diag = Diagnostic::warning(DiagnosticCode::DEPRECATED).with_message("old");
    assert!(!diag.is_error());
    assert_eq!(diag.severity, Severity::Warning);
    assert!(diag.target.is_none());
}

#[test]
fn test_optional_target_clears() {
    let diag = Diagnostic::error("x")
        .with_target(SymbolId::new(1))
        .with_optional_target(None);
    assert!(diag.target.is_none());
}

#[test]
fn test_target_conversions() {
    let file = Arc::new(SourceFile::new("abc", "a.tsp"));
    let loc = SourceLocation::new(file, Span::new(0, 1));
    assert_eq!(
        DiagnosticTarget::from(loc.clone()),
        DiagnosticTarget::Location(loc)
    );
    assert_eq!(
        DiagnosticTarget::from(TypeId::new(2)),
        DiagnosticTarget::Type(TypeId::new(2))
    );
    assert_eq!(
        DiagnosticTarget::from(SymbolId::new(4)),
        DiagnosticTarget::Symbol(SymbolId::new(4))
    );
}

#[test]
fn test_diagnostic_display() {
    let diag = Diagnostic::error("unknown-identifier").with_message("Unknown identifier Foo");
    assert_eq!(diag.to_string(), "error unknown-identifier: Unknown identifier Foo");

    let diag = Diagnostic::warning("deprecated").with_message("Deprecated: use Bar");
    assert_eq!(diag.to_string(), "warning deprecated: Deprecated: use Bar");
}
