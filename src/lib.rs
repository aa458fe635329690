//! typexpr - canonical type expressions from structural type graphs
//!
//! # Overview
//!
//! Code generators, struct-literal fillers and diagnostic printers often hold
//! a type as a graph handed out by a compiler front-end, and need the text a
//! programmer would write for it. typexpr produces that text:
//!
//! - one line, deterministic, with no formatting choices
//! - names qualified relative to the scope the output will live in
//! - self-referential graphs cut with a cycle marker
//!
//! # Quick Start
//!
//! ```
//! use typexpr::{render, types::ArenaBuilder};
//! use bumpalo::Bump;
//!
//! let arena = Bump::new();
//! let builder = ArenaBuilder::new(&arena);
//!
//! let app = builder.scope("example.com/app", "app");
//! let http = builder.scope("net/http", "http");
//! let request = builder.named(Some(http), "Request");
//!
//! let handler = builder.func(
//!     [builder.var("r", builder.pointer(request))],
//!     [builder.var("", builder.error().unwrap())],
//!     false,
//! );
//! assert_eq!(render(app, handler).unwrap(), "func(r *http.Request) error");
//! ```
//!
//! # Configuration
//!
//! [`Renderer`] takes [`RenderOptions`] (variadic fallback rule, depth limit,
//! cycle marker glyph) and a custom [`Qualifier`] for projects whose import
//! rules differ from plain scope identity.

// Re-export the renderer
pub use typexpr_core::{
    IdentityQualifier, Qualifier, RenderError, RenderOptions, Renderer, TypeString,
    VariadicFallback, render,
};

// Re-export the type model
pub use typexpr_types as types;
