//! Source location resolution for diagnostic targets.
//!
//! Turns any [`DiagnosticTarget`] into a [`SourceLocation`]:
//! - a resolved location is returned as is
//! - a symbol resolves through its first declaration (after following a
//!   `using` alias to the symbol it re-exposes)
//! - a node resolves to its own span in the file of its root script
//! - a type resolves through the node that produced it
//!
//! When nothing real can be found the result is a synthetic location, so
//! callers always get something they can display.

use tsp_ir::{NodeId, SourceLocation, SymbolId, TargetLookup, TypeId};

use crate::DiagnosticTarget;

/// Placeholder for nodes that cannot be traced back to a source root.
///
/// Every target node should be reachable from a script or JS source file; an
/// unbound one means some pass built a node tree without attaching it.
pub const UNBOUND_NODE_LOCATION: &str =
    "<unknown location - cannot obtain source location of unbound node - please report a compiler bug>";

/// Options for [`get_source_location`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct SourceLocationOptions {
    /// For declarations with an identifier, report the identifier's span
    /// instead of the whole declaration. Keeps highlighted ranges small.
    pub locate_id: bool,
}

impl SourceLocationOptions {
    /// Options with `locate_id` set.
    pub const LOCATE_ID: SourceLocationOptions = SourceLocationOptions { locate_id: true };
}

/// The model handed to the resolver is inconsistent with the target.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LocationError {
    #[error("node {0:?} is not part of the model")]
    UnknownNode(NodeId),
    #[error("symbol {0:?} is not part of the model")]
    UnknownSymbol(SymbolId),
    #[error("type {0:?} is not part of the model")]
    UnknownType(TypeId),
    #[error("using symbol {0:?} has no source symbol")]
    MissingUsingSource(SymbolId),
    #[error("parent chain of node {0:?} does not terminate")]
    ParentCycle(NodeId),
}

/// Resolve a target, or `None` when there is no target.
///
/// Never fails: inconsistencies in the model are logged and reported as a
/// synthetic location describing the problem.
pub fn get_source_location<M: TargetLookup + ?Sized>(
    model: &M,
    target: Option<&DiagnosticTarget>,
    options: SourceLocationOptions,
) -> Option<SourceLocation> {
    let target = target?;
    let location = try_source_location(model, target, options).unwrap_or_else(|err| {
        tracing::warn!(%err, ?target, "cannot resolve diagnostic target");
        SourceLocation::synthetic(Some(&format!("<unknown location - {err}>")))
    });
    Some(location)
}

/// Resolve a target, surfacing model inconsistencies as errors.
pub fn try_source_location<M: TargetLookup + ?Sized>(
    model: &M,
    target: &DiagnosticTarget,
    options: SourceLocationOptions,
) -> Result<SourceLocation, LocationError> {
    match *target {
        DiagnosticTarget::Location(ref location) => Ok(location.clone()),
        DiagnosticTarget::Symbol(id) => symbol_location(model, id, options),
        DiagnosticTarget::Node(id) => node_location(model, id, options),
        DiagnosticTarget::Type(id) => {
            let ty = model.ty(id).ok_or(LocationError::UnknownType(id))?;
            match ty.node {
                Some(node) => node_location(model, node, options),
                None => {
                    tracing::debug!(?id, kind = %ty.kind, "type has no node");
                    Ok(SourceLocation::synthetic(None))
                }
            }
        }
    }
}

fn symbol_location<M: TargetLookup + ?Sized>(
    model: &M,
    id: SymbolId,
    options: SourceLocationOptions,
) -> Result<SourceLocation, LocationError> {
    let mut symbol = model.symbol(id).ok_or(LocationError::UnknownSymbol(id))?;
    if symbol.is_using() {
        let source = symbol
            .symbol_source
            .ok_or(LocationError::MissingUsingSource(id))?;
        symbol = model
            .symbol(source)
            .ok_or(LocationError::UnknownSymbol(source))?;
    }

    match symbol.declarations.first() {
        Some(&decl) => node_location(model, decl, options),
        None => {
            tracing::debug!(?id, name = %symbol.name, "symbol has no declarations");
            Ok(SourceLocation::synthetic(None))
        }
    }
}

fn node_location<M: TargetLookup + ?Sized>(
    model: &M,
    id: NodeId,
    options: SourceLocationOptions,
) -> Result<SourceLocation, LocationError> {
    let node = model.node(id).ok_or(LocationError::UnknownNode(id))?;

    let mut root = node;
    let mut steps = 0usize;
    while let Some(parent) = root.parent {
        if steps >= model.node_count() {
            return Err(LocationError::ParentCycle(id));
        }
        root = model.node(parent).ok_or(LocationError::UnknownNode(parent))?;
        steps += 1;
    }

    let file = match root.file {
        Some(ref file) if root.kind.is_source_root() => file,
        _ => {
            tracing::debug!(?id, root_kind = ?root.kind, "node is not bound to a source file");
            let placeholder = if node.is_synthetic() {
                None
            } else {
                Some(UNBOUND_NODE_LOCATION)
            };
            return Ok(SourceLocation::synthetic(placeholder));
        }
    };

    let span = match (options.locate_id, node.id) {
        (true, Some(ident)) => {
            model
                .node(ident)
                .ok_or(LocationError::UnknownNode(ident))?
                .span
        }
        _ => node.span,
    };

    Ok(SourceLocation::new(file.clone(), span))
}
