//! Failures raised while interpreting projections.
//!
//! Unlike internal assertions these can be triggered by user code (a
//! projection script using a type the wrong way), so they are ordinary
//! errors. The caller that runs the projection converts them into
//! diagnostics.

use tsp_ir::{Type, TypeKind};

/// A failure while interpreting a projection.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ProjectionError {
    message: String,
}

impl ProjectionError {
    pub fn new(message: impl Into<String>) -> Self {
        ProjectionError {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Check that `ty` has one of the `kinds`.
///
/// `type_description` names the value in the error, e.g. `"self"` or
/// `"first argument"`.
pub fn assert_type(
    type_description: &str,
    ty: &Type,
    kinds: &[TypeKind],
) -> Result<(), ProjectionError> {
    if kinds.contains(&ty.kind) {
        return Ok(());
    }

    let expected = kinds
        .iter()
        .map(|kind| kind.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    Err(ProjectionError::new(format!(
        "Expected {type_description} to be type {expected}"
    )))
}
