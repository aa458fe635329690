use thiserror::Error;

/// Errors reported while assembling a type graph.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// A late-bound part of a node was set twice.
    #[error("{what} is already set")]
    AlreadySet { what: &'static str },

    /// The node passed to a completion call has the wrong kind.
    #[error("expected {expected} type, found {found}")]
    WrongKind {
        expected: &'static str,
        found: &'static str,
    },
}
