use super::*;
use crate::Severity;
use pretty_assertions::assert_eq;

fn diag(code: &'static str) -> Diagnostic {
    Diagnostic::error(code).with_message(code)
}

fn codes(diagnostics: &[Diagnostic]) -> Vec<&str> {
    diagnostics.iter().map(|d| d.code.as_str()).collect()
}

#[test]
fn ignore_wrap_returns_value() {
    assert_eq!(ignore_diagnostics(DiagnosticCollector::new().wrap(42)), 42);

    let mut c = DiagnosticCollector::new();
    c.add(diag("a"));
    assert_eq!(ignore_diagnostics(c.wrap("value")), "value");
}

#[test]
fn add_preserves_insertion_order() {
    let mut c = DiagnosticCollector::new();
    c.add(diag("d1"));
    c.add(diag("d2"));
    let result = c.wrap(());
    assert_eq!(codes(&result.diagnostics), ["d1", "d2"]);
}

#[test]
fn pipe_returns_value_and_appends_diagnostics() {
    let mut c = DiagnosticCollector::new();
    c.add(diag("before"));
    let value = c.pipe(DiagnosticResult::new(7, vec![diag("p1"), diag("p2")]));
    c.add(diag("after"));

    assert_eq!(value, 7);
    assert_eq!(codes(c.diagnostics()), ["before", "p1", "p2", "after"]);
}

fn leaf(name: &'static str) -> DiagnosticResult<&'static str> {
    let mut c = DiagnosticCollector::new();
    c.add(diag(name));
    c.wrap(name)
}

fn branch(left: &'static str, right: &'static str, own: &'static str) -> DiagnosticResult<usize> {
    let mut c = DiagnosticCollector::new();
    let a = c.pipe(leaf(left));
    c.add(diag(own));
    let b = c.pipe(leaf(right));
    c.wrap(a.len() + b.len())
}

#[test]
fn nested_pipes_are_depth_first_left_to_right() {
    let mut root = DiagnosticCollector::new();
    let x = root.pipe(branch("a", "b", "ab"));
    let y = root.pipe(branch("c", "d", "cd"));
    root.add(diag("root"));
    let result = root.wrap(x + y);

    assert_eq!(result.value, 4);
    assert_eq!(
        codes(&result.diagnostics),
        ["a", "ab", "b", "c", "cd", "d", "root"]
    );
}

#[test]
fn absorb_concatenates_in_order() {
    let mut first = DiagnosticCollector::new();
    first.add(diag("f1"));
    let mut second = DiagnosticCollector::new();
    second.add(diag("s1"));
    second.add(diag("s2"));

    first.absorb(second);
    assert_eq!(codes(first.diagnostics()), ["f1", "s1", "s2"]);
    assert_eq!(first.len(), 3);
}

#[test]
fn has_errors_ignores_warnings() {
    let mut c = DiagnosticCollector::new();
    assert!(c.is_empty());
    c.add(Diagnostic::warning("deprecated"));
    assert!(!c.has_errors());
    c.add(diag("bad"));
    assert!(c.has_errors());
    assert!(c.wrap(()).has_errors());
}

#[test]
fn result_helpers() {
    let result = DiagnosticResult::from((2, vec![Diagnostic::warning("w")]));
    let mapped = result.map(|v| v * 10);
    assert_eq!(mapped.value, 20);
    assert_eq!(mapped.diagnostics[0].severity, Severity::Warning);

    let (value, diagnostics) = DiagnosticResult::ok("x").into_parts();
    assert_eq!(value, "x");
    assert!(diagnostics.is_empty());
}

#[test]
fn report_diagnostic_seam() {
    fn report_twice(reporter: &mut dyn ReportDiagnostic) {
        reporter.report_diagnostic(diag("one"));
        reporter.report_diagnostic(diag("two"));
    }

    let mut collector = DiagnosticCollector::new();
    report_twice(&mut collector);
    assert_eq!(codes(&collector.into_diagnostics()), ["one", "two"]);

    let mut list: Vec<Diagnostic> = Vec::new();
    report_twice(&mut list);
    assert_eq!(codes(&list), ["one", "two"]);
}

#[test]
fn extend_appends() {
    let mut c = DiagnosticCollector::new();
    c.extend([diag("x"), diag("y")]);
    assert_eq!(codes(c.diagnostics()), ["x", "y"]);
}
