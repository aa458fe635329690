//! Configuration options for the renderer.

/// What to do when the last parameter of a variadic signature is not a slice.
///
/// Some front-ends model the built-in `append(s, "x"...)` as
/// `func([]byte, string...)`, with a bare `string` as the variadic parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VariadicFallback {
    /// Accept a bare type whose underlying type is `string`; panic otherwise.
    #[default]
    StringOnly,

    /// Accept any bare type and print it followed by `...`.
    AnyType,

    /// A non-slice variadic parameter always panics.
    Forbid,
}

/// Configuration options for rendering.
///
/// # Example
///
/// ```
/// use typexpr_core::{RenderOptions, VariadicFallback};
///
/// let options = RenderOptions {
///     variadic_fallback: VariadicFallback::AnyType,
///     max_depth: Some(64),
///     ..RenderOptions::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Handling of non-slice variadic parameters.
    ///
    /// Default: `VariadicFallback::StringOnly`
    pub variadic_fallback: VariadicFallback,

    /// Maximum nesting depth (for protection against adversarial graphs).
    ///
    /// Set to `None` for no limit.
    ///
    /// Default: None
    pub max_depth: Option<usize>,

    /// Glyph written before the kind tag of a cycle marker.
    ///
    /// Default: `○`
    pub cycle_marker: char,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            variadic_fallback: VariadicFallback::default(),
            max_depth: None,
            cycle_marker: '○',
        }
    }
}
