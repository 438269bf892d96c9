//! Internal invariant assertions.
//!
//! Use these to report bugs in the compiler, not errors in the code being
//! compiled. A failed assertion is never turned into a diagnostic: it panics
//! and ends the current compilation.
//!
//! When the failure relates to some node, symbol, or type, pass it as the
//! target. Its position is appended to the message to give a clue about what
//! got the compiler off track. Problems resolving that position are ignored so
//! they never mask the real failure.

use tsp_ir::TargetLookup;

use crate::{try_source_location, DiagnosticTarget, SourceLocationOptions};

/// Panic with `message` unless `condition` holds.
#[track_caller]
#[inline]
pub fn compiler_assert<M: TargetLookup + ?Sized>(
    model: &M,
    condition: bool,
    message: &str,
    target: Option<&DiagnosticTarget>,
) {
    if condition {
        return;
    }
    compiler_bug_at(model, message, target)
}

/// Report a compiler bug located at `target` and panic.
#[cold]
#[track_caller]
pub fn compiler_bug_at<M: TargetLookup + ?Sized>(
    model: &M,
    message: &str,
    target: Option<&DiagnosticTarget>,
) -> ! {
    let message = assertion_message(model, message, target);
    tracing::error!(%message, "internal compiler error");
    panic!("{message}")
}

/// Report a compiler bug with no associated source position and panic.
#[cold]
#[track_caller]
pub fn compiler_bug(message: &str) -> ! {
    tracing::error!(%message, "internal compiler error");
    panic!("{message}")
}

/// Build the assertion message, appending the target's position if it can be
/// resolved.
fn assertion_message<M: TargetLookup + ?Sized>(
    model: &M,
    message: &str,
    target: Option<&DiagnosticTarget>,
) -> String {
    let location = target
        .and_then(|target| try_source_location(model, target, SourceLocationOptions::default()).ok());

    match location {
        Some(location) => {
            let (line, column) = location.start_position().one_based();
            format!(
                "{message}\nOccurred while compiling code in {} near line {line}, column {column}",
                location.path()
            )
        }
        None => message.to_owned(),
    }
}
