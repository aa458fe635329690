use core::cell::OnceCell;
use core::fmt;

use super::{NamedType, Primitive};
use crate::ModelError;

/// Direction of a channel type.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ChanDir {
    /// `chan T`
    SendRecv,
    /// `chan<- T`
    SendOnly,
    /// `<-chan T`
    RecvOnly,
}

/// A struct field. An empty name marks an embedded field.
#[derive(Debug, Clone, Copy)]
pub struct Field<'a> {
    pub name: &'a str,
    pub ty: &'a TypeNode<'a>,
    pub tag: Option<&'a str>,
}

impl<'a> Field<'a> {
    pub fn is_embedded(&self) -> bool {
        self.name.is_empty()
    }
}

/// A tuple element: a parameter or a result. An empty name means unnamed.
#[derive(Debug, Clone, Copy)]
pub struct Var<'a> {
    pub name: &'a str,
    pub ty: &'a TypeNode<'a>,
}

/// Function signature.
///
/// When `variadic` is set, the last parameter is normally a slice whose
/// element type is the type of the `...` parameter.
#[derive(Debug, Clone, Copy)]
pub struct Signature<'a> {
    pub params: &'a [Var<'a>],
    pub results: &'a [Var<'a>],
    pub variadic: bool,
}

/// An explicitly declared interface method.
#[derive(Debug, Clone, Copy)]
pub struct Method<'a> {
    pub name: &'a str,
    pub sig: Signature<'a>,
}

/// Methods and embedded types of an interface, in source order.
#[derive(Clone, Copy)]
pub struct InterfaceBody<'a> {
    pub methods: &'a [Method<'a>],
    pub embeddeds: &'a [&'a TypeNode<'a>],
}

/// Interface type.
///
/// The body is filled in after the interface node exists, which lets an
/// interface (or a method signature inside it) refer to the interface itself.
pub struct InterfaceType<'a> {
    body: OnceCell<InterfaceBody<'a>>,
}

impl<'a> InterfaceType<'a> {
    pub fn new() -> Self {
        Self {
            body: OnceCell::new(),
        }
    }

    /// Set methods and embedded types. Fails if already complete.
    pub fn complete(
        &self,
        methods: &'a [Method<'a>],
        embeddeds: &'a [&'a TypeNode<'a>],
    ) -> Result<(), ModelError> {
        self.body
            .set(InterfaceBody { methods, embeddeds })
            .map_err(|_| ModelError::AlreadySet { what: "interface body" })
    }

    pub fn is_complete(&self) -> bool {
        self.body.get().is_some()
    }

    /// Explicit methods; empty until the interface is complete.
    pub fn methods(&self) -> &'a [Method<'a>] {
        self.body.get().map(|b| b.methods).unwrap_or(&[])
    }

    /// Embedded types; empty until the interface is complete.
    pub fn embeddeds(&self) -> &'a [&'a TypeNode<'a>] {
        self.body.get().map(|b| b.embeddeds).unwrap_or(&[])
    }
}

impl Default for InterfaceType<'_> {
    fn default() -> Self {
        Self::new()
    }
}

// Embedded types may contain the interface itself, so only the shape is shown.
impl fmt::Debug for InterfaceType<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let methods: alloc::vec::Vec<&str> = self.methods().iter().map(|m| m.name).collect();
        f.debug_struct("InterfaceType")
            .field("methods", &methods)
            .field("embeddeds", &self.embeddeds().len())
            .finish()
    }
}

/// A type defined outside the closed set of kinds.
///
/// The provider supplies the textual form through `Display`.
pub trait OpaqueType: fmt::Display + fmt::Debug {
    /// Kind tag used when this node shows up as a cycle marker.
    fn kind_name(&self) -> &'static str {
        "Opaque"
    }
}

/// One node of a type graph.
///
/// Nodes are allocated by a provider (see [`crate::ArenaBuilder`]) and refer
/// to each other by reference, so a graph may share and revisit nodes.
/// Identity of a node is its address.
#[derive(Debug)]
pub enum TypeNode<'a> {
    Basic(Primitive),

    /// `[len]elem`
    Array { len: u64, elem: &'a TypeNode<'a> },

    /// `[]elem`
    Slice(&'a TypeNode<'a>),

    /// `struct{...}`; fields are kept in declaration order.
    Struct(&'a [Field<'a>]),

    /// `*elem`
    Pointer(&'a TypeNode<'a>),

    /// A parameter or result list on its own.
    Tuple(&'a [Var<'a>]),

    Signature(Signature<'a>),

    Interface(InterfaceType<'a>),

    /// `map[key]elem`
    Map {
        key: &'a TypeNode<'a>,
        elem: &'a TypeNode<'a>,
    },

    Chan { dir: ChanDir, elem: &'a TypeNode<'a> },

    Named(NamedType<'a>),

    Opaque(&'a dyn OpaqueType),
}

impl<'a> TypeNode<'a> {
    /// Runtime kind tag.
    pub fn kind_name(&self) -> &'static str {
        match self {
            TypeNode::Basic(_) => "Basic",
            TypeNode::Array { .. } => "Array",
            TypeNode::Slice(_) => "Slice",
            TypeNode::Struct(_) => "Struct",
            TypeNode::Pointer(_) => "Pointer",
            TypeNode::Tuple(_) => "Tuple",
            TypeNode::Signature(_) => "Signature",
            TypeNode::Interface(_) => "Interface",
            TypeNode::Map { .. } => "Map",
            TypeNode::Chan { .. } => "Chan",
            TypeNode::Named(_) => "Named",
            TypeNode::Opaque(opaque) => opaque.kind_name(),
        }
    }

    /// Identity comparison.
    pub fn same(&self, other: &TypeNode<'_>) -> bool {
        core::ptr::eq(
            self as *const TypeNode<'_> as *const (),
            other as *const TypeNode<'_> as *const (),
        )
    }

    /// Follow named types to their definition.
    ///
    /// Returns `self` for unnamed types, and `None` when a name in the chain
    /// has no definition yet or the chain loops back on itself.
    pub fn underlying(&'a self) -> Option<&'a TypeNode<'a>> {
        let mut seen: alloc::vec::Vec<&'a TypeNode<'a>> = alloc::vec::Vec::new();
        let mut current = self;
        while let TypeNode::Named(named) = current {
            if seen.iter().any(|n| n.same(current)) {
                return None;
            }
            seen.push(current);
            current = named.underlying()?;
        }
        Some(current)
    }

    pub fn as_basic(&self) -> Option<Primitive> {
        match self {
            TypeNode::Basic(p) => Some(*p),
            _ => None,
        }
    }

    pub fn as_named(&self) -> Option<&NamedType<'a>> {
        match self {
            TypeNode::Named(named) => Some(named),
            _ => None,
        }
    }

    pub fn as_interface(&self) -> Option<&InterfaceType<'a>> {
        match self {
            TypeNode::Interface(iface) => Some(iface),
            _ => None,
        }
    }
}
