//! Unit tests for code generation.

use super::*;
use crate::lexer::Lexer;
use crate::parser::Parser;

/// Compiles `source` and returns the emitted instruction lines.
fn compile(source: &str) -> Vec<String> {
    let tokens = Lexer::new(source).tokenize();
    let mut parser = Parser::new(&tokens);
    let functions = parser
        .parse_file()
        .unwrap_or_else(|e| panic!("parse failed for {:?}: {}", source, e));

    let mut codegen = Codegen::new();
    codegen.compile(&functions);
    codegen.instructions().to_vec()
}

/// Asserts that `needle` appears in `lines`, returning its index.
fn find(lines: &[String], needle: &str) -> usize {
    lines
        .iter()
        .position(|line| line.contains(needle))
        .unwrap_or_else(|| panic!("no line containing {:?} in:\n{}", needle, lines.join("\n")))
}

#[test]
fn test_prologue_is_first_eight_lines() {
    let lines = compile("int main() { return 0; }");
    assert_eq!(&lines[..8], &PROGRAM_PROLOGUE);
}

#[test]
fn test_prologue_emitted_once() {
    let lines = compile("int foo() { return 1; } int main() { return 0; }");
    let starts = lines.iter().filter(|l| *l == "_start:").count();
    assert_eq!(starts, 1);
}

#[test]
fn test_return_constant() {
    let lines = compile("int main() { return 42; }");

    let label = find(&lines, "main:");
    let push = find(&lines, "push rbp");
    let setup = find(&lines, "mov rbp, rsp");
    let value = find(&lines, "mov     eax, 42");
    let pop = find(&lines, "pop rbp");
    let ret = find(&lines, "ret");
    assert!(label < push && push < setup && setup < value && value < pop && pop < ret);
}

#[test]
fn test_main_label_is_exact() {
    let lines = compile("int main() { return 0; }");
    assert!(lines.contains(&"main:".to_string()));
}

#[test]
fn test_other_labels_are_exact() {
    let lines = compile("int helper() { return 1; } int main() { return 0; }");
    assert!(lines.contains(&"helper:".to_string()));
}

#[test]
fn test_return_binary_expression() {
    let lines = compile("int main() { return 6 + 2; }");

    let right = find(&lines, "mov     edx, 2");
    let left = find(&lines, "mov     eax, 6");
    let add = find(&lines, "add     eax, edx");
    assert!(right < left && left < add, "emission order is right, left, op");
}

#[test]
fn test_subtraction() {
    let lines = compile("int main() { return 9 - 4; }");
    find(&lines, "mov     edx, 4");
    find(&lines, "mov     eax, 9");
    find(&lines, "sub     eax, edx");
}

#[test]
fn test_multiplication() {
    let lines = compile("int main() { return 7 * 3; }");
    find(&lines, "mov     edx, 3");
    find(&lines, "mov     eax, 7");
    find(&lines, "imul     eax, edx");
}

#[test]
fn test_division_mnemonic() {
    // Two-operand idiv is not valid x86; division never goes through
    // the e2e tests.
    let lines = compile("int main() { return 10 / 2; }");
    find(&lines, "mov     edx, 2");
    find(&lines, "mov     eax, 10");
    find(&lines, "idiv     eax, edx");
}

#[test]
fn test_declaration_store_and_load() {
    let lines = compile("int main() { int x = 5; return x; }");

    let value = find(&lines, "mov     eax, 5");
    let store = find(&lines, "mov     DWORD PTR [rbp-4], eax");
    let load = find(&lines, "mov     eax, DWORD PTR [rbp-4]");
    assert!(value < store && store < load);
}

#[test]
fn test_second_local_gets_next_slot() {
    let lines = compile("int main() { int x = 1; int y = 2; return y; }");
    find(&lines, "mov     DWORD PTR [rbp-4], eax");
    find(&lines, "mov     DWORD PTR [rbp-8], eax");
    find(&lines, "mov     eax, DWORD PTR [rbp-8]");
}

#[test]
fn test_assignment_reuses_slot() {
    let lines = compile("int main() { int x; x = 4; return x; }");
    let store = find(&lines, "mov     DWORD PTR [rbp-4], eax");
    let load = find(&lines, "mov     eax, DWORD PTR [rbp-4]");
    assert!(store < load);
}

#[test]
fn test_variable_operands_in_binary() {
    let lines = compile("int add(int a, int b) { return a + b; }");
    find(&lines, "mov     edx, DWORD PTR [rbp-8]");
    find(&lines, "mov     eax, DWORD PTR [rbp-4]");
    find(&lines, "add     eax, edx");
}

#[test]
fn test_call_no_args() {
    let lines = compile("int foo() { return 1; } int main() { foo(); return 0; }");

    let foo_labels = lines.iter().filter(|l| *l == "foo:").count();
    let main_labels = lines.iter().filter(|l| *l == "main:").count();
    assert_eq!(foo_labels, 1);
    assert_eq!(main_labels, 1);
    find(&lines, "call    foo");
}

#[test]
fn test_call_moves_args_into_registers() {
    let source = "int test(int a, int b) { return a; } \
                  int main() { int a = 1; int b = 2; return test(a, b); }";
    let lines = compile(source);

    let first = find(&lines, "mov     edi, eax");
    let second = find(&lines, "mov     esi, eax");
    let call = find(&lines, "call    test");
    assert!(first < second && second < call);
}

#[test]
fn test_param_spills_use_arg_registers() {
    let lines = compile("int test(int a, int b, int c) { return a; } int main() { return 0; }");
    find(&lines, "mov     DWORD PTR [rbp-4], edi");
    find(&lines, "mov     DWORD PTR [rbp-8], esi");
    find(&lines, "mov     DWORD PTR [rbp-12], edx");
}

#[test]
fn test_arg_register_table_order() {
    assert_eq!(ARG_REGISTERS, ["edi", "esi", "edx", "ecx", "e8d", "e9d"]);
}

#[test]
fn test_control_flow_is_dropped() {
    let lines = compile("int main() { while (x) { return 1; } if (y) { } return 0; }");

    // Only the return 0 path is emitted; the while body's return and
    // both conditions vanish.
    assert_eq!(
        lines.iter().filter(|l| l.contains("ret")).count(),
        1,
        "exactly one ret expected:\n{}",
        lines.join("\n")
    );
    assert!(!lines.iter().any(|l| l.contains("mov     eax, 1")));
}

#[test]
fn test_unsupported_operator_emits_no_op_line() {
    let lines = compile("int main() { return 6 % 4; }");
    find(&lines, "mov     edx, 4");
    find(&lines, "mov     eax, 6");
    assert!(!lines.iter().any(|l| l.contains("idiv") || l.contains("imod")));
}

#[test]
fn test_void_function_body() {
    let lines = compile("void noop() { } int main() { return 0; }");
    assert!(lines.contains(&"noop:".to_string()));
}

#[test]
fn test_finish_joins_with_trailing_newline() {
    let tokens = Lexer::new("int main() { return 0; }").tokenize();
    let functions = Parser::new(&tokens).parse_file().unwrap();
    let mut codegen = Codegen::new();
    codegen.compile(&functions);
    let asm = codegen.finish();

    assert!(asm.starts_with(".intel_syntax noprefix\n"));
    assert!(asm.ends_with("ret\n"));
}
