//! Semantic types produced by the checker.
//!
//! Only the parts diagnostics care about are modelled: the type's kind and
//! the syntax node it was created from, if any.

use std::fmt;

use crate::NodeId;

/// Index into a [`TypeTable`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct TypeId(u32);

impl TypeId {
    #[inline]
    pub const fn new(index: u32) -> Self {
        TypeId(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeId({})", self.0)
    }
}

/// Type kind tag.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TypeKind {
    Model,
    ModelProperty,
    Scalar,
    Interface,
    Enum,
    EnumMember,
    Union,
    UnionVariant,
    Operation,
    Namespace,
    Tuple,
    String,
    Number,
    Boolean,
    Intrinsic,
    TemplateParameter,
}

impl TypeKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            TypeKind::Model => "Model",
            TypeKind::ModelProperty => "ModelProperty",
            TypeKind::Scalar => "Scalar",
            TypeKind::Interface => "Interface",
            TypeKind::Enum => "Enum",
            TypeKind::EnumMember => "EnumMember",
            TypeKind::Union => "Union",
            TypeKind::UnionVariant => "UnionVariant",
            TypeKind::Operation => "Operation",
            TypeKind::Namespace => "Namespace",
            TypeKind::Tuple => "Tuple",
            TypeKind::String => "String",
            TypeKind::Number => "Number",
            TypeKind::Boolean => "Boolean",
            TypeKind::Intrinsic => "Intrinsic",
            TypeKind::TemplateParameter => "TemplateParameter",
        }
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A checked type.
#[derive(Clone, Debug)]
pub struct Type {
    pub kind: TypeKind,
    /// Node that declared or produced this type. Intrinsics and literals
    /// created by the checker have none.
    pub node: Option<NodeId>,
}

impl Type {
    pub fn new(kind: TypeKind, node: Option<NodeId>) -> Self {
        Type { kind, node }
    }
}

/// Owner of all types of a program.
#[derive(Clone, Debug, Default)]
pub struct TypeTable {
    types: Vec<Type>,
}

impl TypeTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alloc(&mut self, ty: Type) -> TypeId {
        let index = u32::try_from(self.types.len())
            .unwrap_or_else(|_| panic!("type table exceeded u32::MAX entries"));
        self.types.push(ty);
        TypeId(index)
    }

    #[inline]
    pub fn get(&self, id: TypeId) -> Option<&Type> {
        self.types.get(id.index())
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
