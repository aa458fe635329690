use thiserror::Error;

/// Errors returned by the renderer.
///
/// Both variants abandon the whole expression; no partial output is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// The graph contains the `invalid` placeholder for an unresolved type.
    #[error("cannot render invalid type")]
    InvalidType,

    /// Nesting went past `RenderOptions::max_depth`.
    #[error("type nesting exceeds the depth limit of {limit}")]
    DepthExceeded { limit: usize },
}
