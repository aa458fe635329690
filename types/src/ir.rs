//! Structural type model.
//!
//! This module contains the read-only representation of a type graph as a
//! front-end or reflection layer hands it to the renderer.
//!
//! ## Structure
//!
//! - **Basic types**: `Primitive` - the predeclared types
//! - **Nodes**: `TypeNode` - one node per structural kind, children by reference
//! - **Scopes**: `Scope`, `NamedType` - qualification and late-bound definitions
//!
//! Graphs may be cyclic. Named types and interfaces are completed after they
//! are allocated, so a definition can mention itself.

pub mod basic;
pub mod node;
pub mod scope;

pub use basic::Primitive;
pub use node::{
    ChanDir, Field, InterfaceBody, InterfaceType, Method, OpaqueType, Signature, TypeNode, Var,
};
pub use scope::{NamedType, Scope};
