mod not_found;
mod submit_form;

/// Each file in the tests/ folder gets compiled as its own crate. `cargo` compiles each test
/// executable in isolation and warns us if, for a specific test file, one or more public
/// functions in `helpers` have never been invoked. By making everything sub-modules of a
/// single `api` executable instead, the helpers are scoped to one crate and the warnings go
/// away.
#[allow(dead_code)]
struct Dummy;
