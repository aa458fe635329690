//! Structural type graphs for `typexpr`.
//!
//! This crate is the type-model side of the renderer: a closed set of type
//! kinds plus an opaque extension kind, and an arena-backed builder a
//! front-end (or a test) uses to assemble possibly cyclic graphs.
//!
//! # Example
//!
//! ```
//! use typexpr_types::{ArenaBuilder, TypeNode};
//! use bumpalo::Bump;
//!
//! let arena = Bump::new();
//! let builder = ArenaBuilder::new(&arena);
//!
//! // type List struct{ next *List }
//! let pkg = builder.scope("example.com/list", "list");
//! let list = builder.named(Some(pkg), "List");
//! let body = builder.record([builder.field("next", builder.pointer(list))]);
//! builder.set_underlying(list, body).unwrap();
//!
//! assert!(matches!(list.underlying(), Some(TypeNode::Struct(_))));
//! ```

#![no_std]
extern crate alloc;

// Type graph representation
pub mod ir;

// Provider implementation
pub mod arena_builder;

mod error;

// Re-export IR types for convenience
pub use ir::{
    ChanDir, Field, InterfaceBody, InterfaceType, Method, NamedType, OpaqueType, Primitive, Scope,
    Signature, TypeNode, Var,
};

pub use arena_builder::ArenaBuilder;
pub use error::ModelError;
