//! Read-only access to the program model.
//!
//! Location resolution only needs to look up nodes, symbols, and types by
//! id. [`TargetLookup`] is that seam; [`SemanticModel`] is the arena-backed
//! implementation used by the compiler and by tests.

use crate::{Node, NodeArena, NodeId, Symbol, SymbolId, SymbolTable, Type, TypeId, TypeTable};

/// Lookup of model entities by id.
///
/// Implementations must not mutate anything on lookup. An id that does not
/// belong to the model yields `None`.
pub trait TargetLookup {
    fn node(&self, id: NodeId) -> Option<&Node>;

    fn symbol(&self, id: SymbolId) -> Option<&Symbol>;

    fn ty(&self, id: TypeId) -> Option<&Type>;

    /// Upper bound on the length of any parent chain.
    ///
    /// Parent walks stop after this many steps, so a malformed cycle cannot
    /// loop forever.
    fn node_count(&self) -> usize;
}

/// Nodes, symbols, and types of one compilation.
#[derive(Clone, Debug, Default)]
pub struct SemanticModel {
    pub nodes: NodeArena,
    pub symbols: SymbolTable,
    pub types: TypeTable,
}

impl SemanticModel {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TargetLookup for SemanticModel {
    #[inline]
    fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    #[inline]
    fn symbol(&self, id: SymbolId) -> Option<&Symbol> {
        self.symbols.get(id)
    }

    #[inline]
    fn ty(&self, id: TypeId) -> Option<&Type> {
        self.types.get(id)
    }

    #[inline]
    fn node_count(&self) -> usize {
        self.nodes.len()
    }
}
