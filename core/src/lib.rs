//! Rendering of structural type graphs as canonical type expressions.
//!
//! Given a type graph from [`typexpr_types`] and the scope of the code that
//! will contain the result, [`render`] produces the single-line expression a
//! programmer would write for that type: `[]*struct{X int}`,
//! `func(a int, b ...string) (bool, error)`, `chan (<-chan int)`, and so on.
//!
//! Names are qualified with their scope when seen from another scope, and
//! self-referential graphs are cut with a cycle marker instead of recursing
//! forever.

#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

extern crate alloc;

mod error;
pub mod options;
pub mod render;

pub use error::RenderError;
pub use options::{RenderOptions, VariadicFallback};
pub use render::{IdentityQualifier, Qualifier, Renderer, TypeString, render};

#[cfg(test)]
pub mod test_utils {
    /// Route renderer events (cycle markers, unrenderable types) to the test
    /// output. Defaults to `debug` unless `RUST_LOG` says otherwise; safe to
    /// call from every test.
    pub fn init_test_logging() {
        use tracing_subscriber::{EnvFilter, fmt};

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        // A second test in the same binary finds the subscriber already set.
        let _ = fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    }
}
