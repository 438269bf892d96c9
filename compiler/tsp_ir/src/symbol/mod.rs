//! Symbols produced by the binder.

use std::fmt;

use bitflags::bitflags;

use crate::NodeId;

/// Index into a [`SymbolTable`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct SymbolId(u32);

impl SymbolId {
    #[inline]
    pub const fn new(index: u32) -> Self {
        SymbolId(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for SymbolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SymbolId({})", self.0)
    }
}

bitflags! {
    /// What kind of entity a symbol binds.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct SymbolFlags: u32 {
        const MODEL = 1 << 1;
        const SCALAR = 1 << 2;
        const OPERATION = 1 << 3;
        const ENUM = 1 << 4;
        const INTERFACE = 1 << 5;
        const UNION = 1 << 6;
        const ALIAS = 1 << 7;
        const NAMESPACE = 1 << 8;
        const DECORATOR = 1 << 9;
        const TEMPLATE_PARAMETER = 1 << 10;
        const FUNCTION = 1 << 11;
        /// Alias introduced by a `using` statement; `symbol_source` is the
        /// symbol it re-exposes.
        const USING = 1 << 12;
    }
}

/// A bound name.
#[derive(Clone, Debug)]
pub struct Symbol {
    pub name: String,
    pub flags: SymbolFlags,
    /// Declaring nodes in declaration order. The first one is authoritative
    /// for location purposes.
    pub declarations: Vec<NodeId>,
    /// Aliased symbol, for `USING` symbols.
    pub symbol_source: Option<SymbolId>,
}

impl Symbol {
    pub fn new(name: impl Into<String>, flags: SymbolFlags) -> Self {
        Symbol {
            name: name.into(),
            flags,
            declarations: Vec::new(),
            symbol_source: None,
        }
    }

    /// Create a `using` alias of `source`.
    pub fn using(name: impl Into<String>, source: SymbolId) -> Self {
        Symbol {
            name: name.into(),
            flags: SymbolFlags::USING,
            declarations: Vec::new(),
            symbol_source: Some(source),
        }
    }

    #[must_use]
    pub fn with_declaration(mut self, decl: NodeId) -> Self {
        self.declarations.push(decl);
        self
    }

    #[inline]
    pub fn is_using(&self) -> bool {
        self.flags.contains(SymbolFlags::USING)
    }
}

/// Owner of all symbols of a program.
#[derive(Clone, Debug, Default)]
pub struct SymbolTable {
    symbols: Vec<Symbol>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alloc(&mut self, symbol: Symbol) -> SymbolId {
        let index = u32::try_from(self.symbols.len())
            .unwrap_or_else(|_| panic!("symbol table exceeded u32::MAX entries"));
        self.symbols.push(symbol);
        SymbolId(index)
    }

    #[inline]
    pub fn get(&self, id: SymbolId) -> Option<&Symbol> {
        self.symbols.get(id.index())
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn using_symbol_points_at_source() {
        let mut table = SymbolTable::new();
        let target = table.alloc(Symbol::new("Foo", SymbolFlags::MODEL));
        let alias = table.alloc(Symbol::using("Foo", target));

        let Some(alias) = table.get(alias) else {
            panic!("alias was not allocated");
        };
        assert!(alias.is_using());
        assert_eq!(alias.symbol_source, Some(target));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn declarations_keep_order() {
        let sym = Symbol::new("Ns", SymbolFlags::NAMESPACE)
            .with_declaration(NodeId::new(4))
            .with_declaration(NodeId::new(2));
        assert_eq!(sym.declarations, vec![NodeId::new(4), NodeId::new(2)]);
        assert!(!sym.is_using());
    }

    #[test]
    fn unknown_symbol_is_none() {
        let table = SymbolTable::new();
        assert!(table.is_empty());
        assert!(table.get(SymbolId::new(0)).is_none());
    }
}
