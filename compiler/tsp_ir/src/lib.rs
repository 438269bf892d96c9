//! TSP IR - source text and the compiler model seen by diagnostics.
//!
//! This crate contains the data structures that diagnostic reporting reads:
//! - Spans for byte ranges within a file
//! - `SourceFile` with its lazily built line-start index
//! - `SourceLocation`, a span anchored in a concrete (or synthetic) file
//! - Arena-backed syntax nodes, symbols, and semantic types
//!
//! # Design Philosophy
//!
//! - **Flatten Everything**: nodes, symbols, and types refer to each other by
//!   `u32` ids, never by owning pointers. Parent links are plain indices.
//! - **Read-only resolution**: nothing in here is mutated by location lookup.
//!   The only memoized state is the per-file line-start table.
//! - **Interface Segregation**: consumers see the model through the
//!   [`TargetLookup`] trait only.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod location;
mod model;
mod source_file;
mod span;
pub mod symbol;
pub mod syntax;
pub mod types;

pub use location::{SourceLocation, UNKNOWN_LOCATION};
pub use model::{SemanticModel, TargetLookup};
pub use source_file::{LineAndCharacter, SourceFile};
pub use span::{Span, SpanError};
pub use symbol::{Symbol, SymbolFlags, SymbolId, SymbolTable};
pub use syntax::{Node, NodeArena, NodeFlags, NodeId, SyntaxKind};
pub use types::{Type, TypeId, TypeKind, TypeTable};
