/// Declares a rendering test.
///
/// `build` receives an `ArenaBuilder` and the scope the type is rendered
/// from, and returns the root node. `rendered` is the expected result of
/// `typexpr::render`.
macro_rules! test_case {
    (
        name: $name:ident,
        build: |$builder:ident, $scope:ident| $body:expr,
        rendered: $expected:expr $(,)?
    ) => {
        #[test]
        fn $name() {
            let arena = bumpalo::Bump::new();
            let $builder = typexpr::types::ArenaBuilder::new(&arena);
            let $scope = $builder.scope("example.com/app", "app");
            let ty = $body;
            let expected: Result<&str, typexpr::RenderError> = $expected;
            let actual = typexpr::render($scope, ty);
            pretty_assertions::assert_eq!(actual.as_deref().map_err(|e| e.clone()), expected);
        }
    };
}
