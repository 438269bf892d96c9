//! Syntax nodes stored in a flat arena.
//!
//! Nodes never own each other. A node's `parent` and `id` are [`NodeId`]
//! indices into the same [`NodeArena`]; walking parents always ends at a node
//! with no parent. Only the top-level containers ([`SyntaxKind::TypeSpecScript`]
//! and [`SyntaxKind::JsSourceFile`]) carry the [`SourceFile`] they were parsed
//! from.

use std::fmt;
use std::sync::Arc;

use bitflags::bitflags;

use crate::{SourceFile, Span};

/// Index into a [`NodeArena`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct NodeId(u32);

impl NodeId {
    #[inline]
    pub const fn new(index: u32) -> Self {
        NodeId(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

/// Node discriminant.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum SyntaxKind {
    // Top-level containers
    TypeSpecScript,
    JsSourceFile,

    // Declarations
    NamespaceStatement,
    ModelStatement,
    ModelProperty,
    ScalarStatement,
    InterfaceStatement,
    OperationStatement,
    EnumStatement,
    EnumMember,
    UnionStatement,
    AliasStatement,
    UsingStatement,
    TemplateParameterDeclaration,

    // Expressions and references
    Identifier,
    TypeReference,
    MemberExpression,
    StringLiteral,
    NumericLiteral,
    BooleanLiteral,
    DecoratorExpression,

    // Declarations contributed by JS files
    JsNamespaceDeclaration,
}

impl SyntaxKind {
    /// Whether this kind is a root that anchors its subtree in a file.
    #[inline]
    pub const fn is_source_root(self) -> bool {
        matches!(self, SyntaxKind::TypeSpecScript | SyntaxKind::JsSourceFile)
    }
}

bitflags! {
    /// Per-node flags set by the parser and later passes.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct NodeFlags: u32 {
        /// Node was produced by the parser while recovering from an error.
        const THIS_NODE_HAS_ERROR = 1 << 0;
        /// Some descendant has a parse error.
        const DESCENDANT_HAS_ERROR = 1 << 1;
        /// Node was fabricated by the compiler and has no source text.
        const SYNTHETIC = 1 << 3;
    }
}

/// A syntax node.
#[derive(Clone, Debug)]
pub struct Node {
    pub kind: SyntaxKind,
    pub flags: NodeFlags,
    pub span: Span,
    /// Enclosing node; `None` for roots and for detached nodes.
    pub parent: Option<NodeId>,
    /// Identifier child for named declarations.
    pub id: Option<NodeId>,
    /// Originating file. Set on source roots only.
    pub file: Option<Arc<SourceFile>>,
}

impl Node {
    /// Create a detached node with no parent, id, or file.
    pub fn new(kind: SyntaxKind, span: Span) -> Self {
        Node {
            kind,
            flags: NodeFlags::empty(),
            span,
            parent: None,
            id: None,
            file: None,
        }
    }

    #[must_use]
    pub fn with_flags(mut self, flags: NodeFlags) -> Self {
        self.flags |= flags;
        self
    }

    #[must_use]
    pub fn with_parent(mut self, parent: NodeId) -> Self {
        self.parent = Some(parent);
        self
    }

    #[inline]
    pub fn is_synthetic(&self) -> bool {
        self.flags.contains(NodeFlags::SYNTHETIC)
    }
}

/// Owner of all nodes of a program.
#[derive(Clone, Debug, Default)]
pub struct NodeArena {
    nodes: Vec<Node>,
}

impl NodeArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node and return its id.
    pub fn alloc(&mut self, node: Node) -> NodeId {
        let index = u32::try_from(self.nodes.len())
            .unwrap_or_else(|_| panic!("node arena exceeded u32::MAX entries"));
        self.nodes.push(node);
        NodeId(index)
    }

    /// Add a source root spanning the whole of `file`.
    pub fn alloc_root(&mut self, kind: SyntaxKind, file: Arc<SourceFile>) -> NodeId {
        debug_assert!(kind.is_source_root());
        let mut node = Node::new(kind, Span::new(0, file.len()));
        node.file = Some(file);
        self.alloc(node)
    }

    /// Add a node as a child of `parent`.
    pub fn alloc_child(&mut self, parent: NodeId, kind: SyntaxKind, span: Span) -> NodeId {
        self.alloc(Node::new(kind, span).with_parent(parent))
    }

    /// Add a named declaration under `parent` together with its identifier.
    ///
    /// Returns the declaration's id; the identifier is reachable through the
    /// declaration's `id` field.
    pub fn alloc_named(
        &mut self,
        parent: NodeId,
        kind: SyntaxKind,
        span: Span,
        name_span: Span,
    ) -> NodeId {
        let decl = self.alloc_child(parent, kind, span);
        let ident = self.alloc_child(decl, SyntaxKind::Identifier, name_span);
        self.nodes[decl.index()].id = Some(ident);
        decl
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.index())
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
