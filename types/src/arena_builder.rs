use crate::ModelError;
use crate::ir::{
    ChanDir, Field, InterfaceType, Method, NamedType, OpaqueType, Primitive, Scope, Signature,
    TypeNode, Var,
};
use alloc::vec::Vec;
use bumpalo::Bump;
use core::hash::{Hash, Hasher};
use core::ptr;

/// Type graph provider backed by an arena.
///
/// Every constructor allocates a fresh node in a `Bump` arena; nothing is
/// deduplicated, so two calls with the same arguments yield two distinct
/// nodes. Nodes live as long as the arena.
///
/// Values handed to [`ArenaBuilder::opaque`] are moved into the arena and are
/// not dropped when the arena is.
///
/// # Example
///
/// ```
/// use typexpr_types::ArenaBuilder;
/// use bumpalo::Bump;
///
/// let arena = Bump::new();
/// let builder = ArenaBuilder::new(&arena);
///
/// let int_ty = builder.int();
/// let arr_ty = builder.array(3, int_ty);
/// ```
#[derive(Copy, Clone, Debug)]
pub struct ArenaBuilder<'a> {
    arena: &'a Bump,
}

// Builders compare by arena: nodes from equal builders share a lifetime and
// may be linked into one graph.
impl PartialEq for ArenaBuilder<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.shares_arena(other)
    }
}

impl Eq for ArenaBuilder<'_> {}

impl Hash for ArenaBuilder<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        ptr::hash(self.arena, state)
    }
}

impl<'a> ArenaBuilder<'a> {
    /// Create a new arena builder.
    pub fn new(arena: &'a Bump) -> Self {
        Self { arena }
    }

    /// True when both builders allocate into the same arena.
    pub fn shares_arena(&self, other: &ArenaBuilder<'_>) -> bool {
        ptr::eq(self.arena, other.arena)
    }

    fn alloc(self, node: TypeNode<'a>) -> &'a TypeNode<'a> {
        self.arena.alloc(node)
    }

    fn alloc_str(self, s: &str) -> &'a str {
        self.arena.alloc_str(s)
    }

    // ========================================================================
    // Basic types
    // ========================================================================

    pub fn basic(self, primitive: Primitive) -> &'a TypeNode<'a> {
        self.alloc(TypeNode::Basic(primitive))
    }

    pub fn invalid(self) -> &'a TypeNode<'a> {
        self.basic(Primitive::Invalid)
    }

    pub fn bool(self) -> &'a TypeNode<'a> {
        self.basic(Primitive::Bool)
    }

    pub fn int(self) -> &'a TypeNode<'a> {
        self.basic(Primitive::Int)
    }

    pub fn byte(self) -> &'a TypeNode<'a> {
        self.basic(Primitive::Byte)
    }

    pub fn float64(self) -> &'a TypeNode<'a> {
        self.basic(Primitive::Float64)
    }

    pub fn string(self) -> &'a TypeNode<'a> {
        self.basic(Primitive::String)
    }

    // ========================================================================
    // Composite types
    // ========================================================================

    pub fn array(self, len: u64, elem: &'a TypeNode<'a>) -> &'a TypeNode<'a> {
        self.alloc(TypeNode::Array { len, elem })
    }

    pub fn slice(self, elem: &'a TypeNode<'a>) -> &'a TypeNode<'a> {
        self.alloc(TypeNode::Slice(elem))
    }

    pub fn pointer(self, elem: &'a TypeNode<'a>) -> &'a TypeNode<'a> {
        self.alloc(TypeNode::Pointer(elem))
    }

    pub fn map(self, key: &'a TypeNode<'a>, elem: &'a TypeNode<'a>) -> &'a TypeNode<'a> {
        self.alloc(TypeNode::Map { key, elem })
    }

    pub fn chan(self, dir: ChanDir, elem: &'a TypeNode<'a>) -> &'a TypeNode<'a> {
        self.alloc(TypeNode::Chan { dir, elem })
    }

    /// A named struct field.
    pub fn field(self, name: &str, ty: &'a TypeNode<'a>) -> Field<'a> {
        Field {
            name: self.alloc_str(name),
            ty,
            tag: None,
        }
    }

    /// A named struct field with a raw tag.
    pub fn tagged_field(self, name: &str, ty: &'a TypeNode<'a>, tag: &str) -> Field<'a> {
        Field {
            name: self.alloc_str(name),
            ty,
            tag: Some(self.alloc_str(tag)),
        }
    }

    /// An embedded struct field.
    pub fn embedded(self, ty: &'a TypeNode<'a>) -> Field<'a> {
        Field { name: "", ty, tag: None }
    }

    /// Struct type; fields keep the order given.
    pub fn record(self, fields: impl IntoIterator<Item = Field<'a>>) -> &'a TypeNode<'a> {
        let fields: Vec<Field<'a>> = fields.into_iter().collect();
        self.alloc(TypeNode::Struct(self.arena.alloc_slice_copy(&fields)))
    }

    /// A parameter or result. Pass `""` for an unnamed one.
    pub fn var(self, name: &str, ty: &'a TypeNode<'a>) -> Var<'a> {
        Var {
            name: self.alloc_str(name),
            ty,
        }
    }

    fn vars(self, vars: impl IntoIterator<Item = Var<'a>>) -> &'a [Var<'a>] {
        let vars: Vec<Var<'a>> = vars.into_iter().collect();
        self.arena.alloc_slice_copy(&vars)
    }

    pub fn tuple(self, vars: impl IntoIterator<Item = Var<'a>>) -> &'a TypeNode<'a> {
        self.alloc(TypeNode::Tuple(self.vars(vars)))
    }

    /// A signature value, for use as a method or inside [`ArenaBuilder::func`].
    pub fn signature(
        self,
        params: impl IntoIterator<Item = Var<'a>>,
        results: impl IntoIterator<Item = Var<'a>>,
        variadic: bool,
    ) -> Signature<'a> {
        Signature {
            params: self.vars(params),
            results: self.vars(results),
            variadic,
        }
    }

    /// Function type.
    pub fn func(
        self,
        params: impl IntoIterator<Item = Var<'a>>,
        results: impl IntoIterator<Item = Var<'a>>,
        variadic: bool,
    ) -> &'a TypeNode<'a> {
        self.alloc(TypeNode::Signature(self.signature(params, results, variadic)))
    }

    pub fn method(self, name: &str, sig: Signature<'a>) -> Method<'a> {
        Method {
            name: self.alloc_str(name),
            sig,
        }
    }

    /// An interface without a body yet; see [`ArenaBuilder::complete_interface`].
    pub fn interface(self) -> &'a TypeNode<'a> {
        self.alloc(TypeNode::Interface(InterfaceType::new()))
    }

    /// A complete interface.
    pub fn interface_with(
        self,
        methods: impl IntoIterator<Item = Method<'a>>,
        embeddeds: impl IntoIterator<Item = &'a TypeNode<'a>>,
    ) -> Result<&'a TypeNode<'a>, ModelError> {
        let iface = self.interface();
        self.complete_interface(iface, methods, embeddeds)?;
        Ok(iface)
    }

    /// Fill in the body of an interface created by [`ArenaBuilder::interface`].
    pub fn complete_interface(
        self,
        iface: &'a TypeNode<'a>,
        methods: impl IntoIterator<Item = Method<'a>>,
        embeddeds: impl IntoIterator<Item = &'a TypeNode<'a>>,
    ) -> Result<(), ModelError> {
        let Some(iface) = iface.as_interface() else {
            return Err(ModelError::WrongKind {
                expected: "Interface",
                found: iface.kind_name(),
            });
        };
        let methods: Vec<Method<'a>> = methods.into_iter().collect();
        let embeddeds: Vec<&'a TypeNode<'a>> = embeddeds.into_iter().collect();
        iface.complete(
            self.arena.alloc_slice_copy(&methods),
            self.arena.alloc_slice_copy(&embeddeds),
        )
    }

    // ========================================================================
    // Names
    // ========================================================================

    /// A new scope. Every call yields a distinct scope, even for equal paths.
    pub fn scope(self, path: &str, name: &str) -> &'a Scope<'a> {
        let path = self.alloc_str(path);
        let name = self.alloc_str(name);
        self.arena.alloc(Scope::new(path, name))
    }

    /// A named type without a definition yet; see [`ArenaBuilder::set_underlying`].
    pub fn named(self, scope: Option<&'a Scope<'a>>, name: &str) -> &'a TypeNode<'a> {
        self.alloc(TypeNode::Named(NamedType::new(self.alloc_str(name), scope)))
    }

    pub fn set_underlying(
        self,
        named: &'a TypeNode<'a>,
        ty: &'a TypeNode<'a>,
    ) -> Result<(), ModelError> {
        match named.as_named() {
            Some(named) => named.set_underlying(ty),
            None => Err(ModelError::WrongKind {
                expected: "Named",
                found: named.kind_name(),
            }),
        }
    }

    /// The universe `error` type: `interface{Error() string}`.
    pub fn error(self) -> Result<&'a TypeNode<'a>, ModelError> {
        let error_sig = self.signature([], [self.var("", self.string())], false);
        let body = self.interface_with([self.method("Error", error_sig)], [])?;
        let named = self.named(None, "error");
        self.set_underlying(named, body)?;
        Ok(named)
    }

    // ========================================================================
    // Extension types
    // ========================================================================

    pub fn opaque<T: OpaqueType + 'a>(self, value: T) -> &'a TypeNode<'a> {
        let value: &'a T = self.arena.alloc(value);
        self.alloc(TypeNode::Opaque(value))
    }
}
