//! Scopes and named types.

use core::cell::OnceCell;
use core::fmt;

use super::TypeNode;
use crate::ModelError;

/// A compilation unit that owns named types.
///
/// Scopes are compared by identity: two `Scope` values are the same scope
/// only when they are the same allocation, even if their paths and names
/// agree.
#[derive(Debug)]
pub struct Scope<'a> {
    path: &'a str,
    name: &'a str,
}

impl<'a> Scope<'a> {
    pub fn new(path: &'a str, name: &'a str) -> Self {
        Self { path, name }
    }

    /// Full import path (e.g. `net/http`).
    pub fn path(&self) -> &'a str {
        self.path
    }

    /// Identifier used to qualify names owned by this scope (e.g. `http`).
    pub fn name(&self) -> &'a str {
        self.name
    }

    /// Identity comparison.
    pub fn same(&self, other: &Scope<'_>) -> bool {
        core::ptr::eq(
            self as *const Scope<'_> as *const (),
            other as *const Scope<'_> as *const (),
        )
    }
}

/// A declared type name.
///
/// The underlying type is set after construction so that a definition may
/// refer to the name it defines.
pub struct NamedType<'a> {
    name: &'a str,
    scope: Option<&'a Scope<'a>>,
    underlying: OnceCell<&'a TypeNode<'a>>,
}

impl<'a> NamedType<'a> {
    /// A name without an underlying type yet. `scope` is `None` for
    /// universe names such as `error`.
    pub fn new(name: &'a str, scope: Option<&'a Scope<'a>>) -> Self {
        Self {
            name,
            scope,
            underlying: OnceCell::new(),
        }
    }

    pub fn name(&self) -> &'a str {
        self.name
    }

    pub fn scope(&self) -> Option<&'a Scope<'a>> {
        self.scope
    }

    /// The definition, if it has been set.
    pub fn underlying(&self) -> Option<&'a TypeNode<'a>> {
        self.underlying.get().copied()
    }

    /// Set the definition. Fails if it was already set.
    pub fn set_underlying(&self, ty: &'a TypeNode<'a>) -> Result<(), ModelError> {
        self.underlying
            .set(ty)
            .map_err(|_| ModelError::AlreadySet { what: "underlying type" })
    }
}

// The underlying type may refer back to this name, so it is not printed.
impl fmt::Debug for NamedType<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NamedType")
            .field("name", &self.name)
            .field("scope", &self.scope.map(|s| s.path()))
            .field("has_underlying", &self.underlying.get().is_some())
            .finish()
    }
}
