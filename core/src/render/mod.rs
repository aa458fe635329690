//! Rendering of type graphs as type expressions.
//!
//! One routine per kind, all sharing a list of the nodes on the
//! current recursion path. A node met again on its own path is written as a
//! cycle marker (`○Interface`) instead of being descended into.

mod guard;
mod qualify;
mod quote;
mod tuple;
mod writer;


use alloc::string::String;
use core::fmt;

use tracing::{trace, warn};
use typexpr_types::{Scope, Signature, TypeNode};

use crate::{RenderError, RenderOptions};
pub use qualify::{IdentityQualifier, Qualifier};
use writer::Writer;

/// Render `root` as seen from code in `scope`, with default options.
///
/// # Example
///
/// ```
/// use typexpr_core::render;
/// use typexpr_types::ArenaBuilder;
/// use bumpalo::Bump;
///
/// let arena = Bump::new();
/// let builder = ArenaBuilder::new(&arena);
/// let pkg = builder.scope("example.com/app", "app");
///
/// let ty = builder.map(builder.string(), builder.slice(builder.bool()));
/// assert_eq!(render(pkg, ty).unwrap(), "map[string][]bool");
/// ```
///
/// # Panics
///
/// Panics if the graph breaks a provider invariant, such as a variadic
/// signature whose last parameter is neither a slice nor a string, or an
/// opaque node whose `Display` fails.
pub fn render<'a>(scope: &Scope<'_>, root: &'a TypeNode<'a>) -> Result<String, RenderError> {
    Renderer::new(scope).render(root)
}

/// A configured renderer.
///
/// Holds only configuration; every call to [`Renderer::render`] starts with an
/// empty buffer and an empty path.
pub struct Renderer<'r> {
    scope: &'r Scope<'r>,
    options: RenderOptions,
    qualifier: &'r dyn Qualifier,
}

impl<'r> Renderer<'r> {
    pub fn new(scope: &'r Scope<'r>) -> Self {
        Self {
            scope,
            options: RenderOptions::default(),
            qualifier: &IdentityQualifier,
        }
    }

    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_qualifier(mut self, qualifier: &'r dyn Qualifier) -> Self {
        self.qualifier = qualifier;
        self
    }

    /// Render a type expression.
    ///
    /// # Panics
    ///
    /// See [`render`].
    pub fn render<'a>(&self, root: &'a TypeNode<'a>) -> Result<String, RenderError> {
        trace!(kind = root.kind_name(), scope = self.scope.path(), "rendering type");
        let mut writer = Writer::new(self.scope, &self.options, self.qualifier);
        writer.write_type(root)?;
        Ok(writer.finish())
    }

    /// Render a signature without the `func` keyword, as it appears after a
    /// method name.
    pub fn render_signature<'a>(&self, sig: &Signature<'a>) -> Result<String, RenderError> {
        let mut writer = Writer::new(self.scope, &self.options, self.qualifier);
        writer.write_signature(sig)?;
        Ok(writer.finish())
    }
}

impl fmt::Debug for Renderer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Renderer")
            .field("scope", &self.scope.path())
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

/// `Display` adapter for diagnostics.
///
/// Renders with default options. A type that cannot be rendered is shown as
/// `invalid type`.
pub struct TypeString<'s, 'a> {
    scope: &'s Scope<'s>,
    root: &'a TypeNode<'a>,
}

impl<'s, 'a> TypeString<'s, 'a> {
    pub fn new(scope: &'s Scope<'s>, root: &'a TypeNode<'a>) -> Self {
        Self { scope, root }
    }
}

impl fmt::Display for TypeString<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match render(self.scope, self.root) {
            Ok(text) => f.write_str(&text),
            Err(err) => {
                warn!(%err, "displaying unrenderable type");
                f.write_str("invalid type")
            }
        }
    }
}
