//! Name qualification.

use typexpr_types::Scope;

/// Decides whether a name owned by `owner` needs its scope prefix when a
/// type is printed for code living in `viewing`.
///
/// Implemented for functions, so a one-off rule needs no new type:
///
/// ```
/// use typexpr_core::Qualifier;
/// use typexpr_types::Scope;
///
/// fn never(_: &Scope<'_>, _: &Scope<'_>) -> bool {
///     false
/// }
///
/// let a = Scope::new("example.com/a", "a");
/// let b = Scope::new("example.com/b", "b");
/// assert!(!never.must_qualify(&a, &b));
/// ```
pub trait Qualifier {
    fn must_qualify(&self, viewing: &Scope<'_>, owner: &Scope<'_>) -> bool;
}

/// Qualifies every name whose owner is not the viewing scope itself.
///
/// Scopes are compared by identity, so two scopes that share a name or path
/// are still told apart.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityQualifier;

impl Qualifier for IdentityQualifier {
    fn must_qualify(&self, viewing: &Scope<'_>, owner: &Scope<'_>) -> bool {
        !viewing.same(owner)
    }
}

impl<F> Qualifier for F
where
    F: Fn(&Scope<'_>, &Scope<'_>) -> bool,
{
    fn must_qualify(&self, viewing: &Scope<'_>, owner: &Scope<'_>) -> bool {
        self(viewing, owner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_qualifier() {
        let a = Scope::new("example.com/a", "a");
        let a_again = Scope::new("example.com/a", "a");
        assert!(!IdentityQualifier.must_qualify(&a, &a));
        assert!(IdentityQualifier.must_qualify(&a, &a_again));
    }

    #[test]
    fn test_fn_qualifier() {
        fn by_path(viewing: &Scope<'_>, owner: &Scope<'_>) -> bool {
            viewing.path() != owner.path()
        }
        let a = Scope::new("example.com/a", "a");
        let a_again = Scope::new("example.com/a", "a");
        assert!(!by_path.must_qualify(&a, &a_again));
    }
}
