//! End-to-end tests for local variables.

#![cfg(all(target_os = "linux", target_arch = "x86_64"))]

mod common;

use common::assert_exit_code;

#[test]
fn test_declare_then_assign() {
    assert_exit_code(
        r#"int main() {
    int x;
    x = 4;
    return x;
}"#,
        4,
    );
}

#[test]
fn test_initialised_declaration() {
    assert_exit_code("int main() { int x = 5; return x; }", 5);
}

#[test]
fn test_reassignment() {
    assert_exit_code(
        r#"int main() {
    int x = 1;
    x = 99;
    return x;
}"#,
        99,
    );
}

#[test]
fn test_two_locals() {
    assert_exit_code(
        r#"int main() {
    int first = 11;
    int second = 22;
    return second;
}"#,
        22,
    );
}

#[test]
fn test_initialiser_from_variable() {
    assert_exit_code(
        r#"int main() {
    int a = 6;
    int b = a;
    return b;
}"#,
        6,
    );
}
