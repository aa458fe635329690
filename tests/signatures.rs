#[macro_use]
mod cases;

use typexpr::RenderError;

test_case! {
    name: variadic_with_two_results,
    build: |b, _app| b.func(
        [b.var("a", b.int()), b.var("b", b.slice(b.string()))],
        [b.var("", b.bool()), b.var("", b.error().unwrap())],
        true,
    ),
    rendered: Ok("func(a int, b ...string) (bool, error)"),
}

test_case! {
    name: single_unnamed_result,
    build: |b, _app| b.func([b.var("", b.int())], [b.var("", b.bool())], false),
    rendered: Ok("func(int) bool"),
}

test_case! {
    name: named_results,
    build: |b, _app| b.func(
        [],
        [b.var("n", b.int()), b.var("err", b.error().unwrap())],
        false,
    ),
    rendered: Ok("func() (n int, err error)"),
}

test_case! {
    name: slice_without_variadic,
    build: |b, _app| b.func([b.var("xs", b.slice(b.int()))], [], false),
    rendered: Ok("func(xs []int)"),
}

test_case! {
    name: append_string_fallback,
    build: |b, _app| b.func(
        [b.var("", b.slice(b.byte())), b.var("", b.string())],
        [b.var("", b.slice(b.byte()))],
        true,
    ),
    rendered: Ok("func([]byte, string...) []byte"),
}

test_case! {
    name: func_returning_func,
    build: |b, _app| b.func(
        [b.var("f", b.func([b.var("", b.int())], [b.var("", b.int())], false))],
        [b.var("", b.func([], [b.var("", b.string())], false))],
        false,
    ),
    rendered: Ok("func(f func(int) int) func() string"),
}

test_case! {
    name: invalid_result,
    build: |b, _app| b.func([], [b.var("", b.invalid())], false),
    rendered: Err(RenderError::InvalidType),
}

test_case! {
    name: invalid_variadic_element,
    build: |b, _app| b.func([b.var("xs", b.slice(b.invalid()))], [], true),
    rendered: Err(RenderError::InvalidType),
}
