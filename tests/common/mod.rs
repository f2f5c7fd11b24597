//! Common test utilities for minic integration tests.
//!
//! This module provides shared helpers used across the integration and
//! end-to-end test files.

// Each test file is compiled as a separate crate, so not every helper is
// used in every file.
#![allow(dead_code)]

use std::path::Path;
use std::process::Command;

use tempfile::tempdir;

use minic::codegen::Codegen;
use minic::lexer::Lexer;
use minic::parser::Parser;
use minic::token::TokenKind;

/// Compiles a source string through the full pipeline and returns the
/// assembly text.
///
/// Panics on lexical or structural errors; tests that expect failures go
/// through the parser directly.
pub fn compile_to_asm(source: &str) -> String {
    let tokens = Lexer::new(source).tokenize();
    if let Some(bad) = tokens.iter().find(|t| t.kind == TokenKind::Unknown) {
        panic!("lexical error in test source {:?}: {}", source, bad.lexeme);
    }

    let mut parser = Parser::new(&tokens);
    let functions = parser
        .parse_file()
        .unwrap_or_else(|e| panic!("parse failed for {:?}: {}", source, e));

    let mut codegen = Codegen::new();
    codegen.compile(&functions);
    codegen.finish()
}

/// Runs an external tool, panicking with its output on failure.
fn run_tool(tool: &str, args: &[&str]) -> Result<(), String> {
    let output = Command::new(tool)
        .args(args)
        .output()
        .map_err(|e| format!("Failed to run {}: {}", tool, e))?;

    if !output.status.success() {
        return Err(format!(
            "{} failed (exit code {:?}):\n[stdout] {}\n[stderr] {}",
            tool,
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        ));
    }

    Ok(())
}

/// Assembles and links an assembly file into a freestanding executable.
pub fn assemble_and_link(asm_path: &Path, exe_path: &Path) -> Result<(), String> {
    let object_path = asm_path.with_extension("o");

    run_tool(
        "as",
        &[
            "-o",
            &object_path.display().to_string(),
            &asm_path.display().to_string(),
        ],
    )?;
    run_tool(
        "ld",
        &[
            "-o",
            &exe_path.display().to_string(),
            &object_path.display().to_string(),
        ],
    )
}

/// Compiles a source string to an executable and runs it, returning the
/// process exit code.
///
/// This drives the complete path: lex → parse → codegen → `as` → `ld` →
/// execute. The OS reduces the exit value modulo 256.
pub fn compile_and_run(source: &str) -> Result<i32, String> {
    let temp_dir = tempdir().map_err(|e| e.to_string())?;
    let asm_path = temp_dir.path().join("out.s");
    let exe_path = temp_dir.path().join("out");

    std::fs::write(&asm_path, compile_to_asm(source)).map_err(|e| e.to_string())?;
    assemble_and_link(&asm_path, &exe_path)?;

    let status = Command::new(&exe_path)
        .status()
        .map_err(|e| format!("Failed to run executable: {}", e))?;
    status
        .code()
        .ok_or_else(|| "executable terminated without an exit code".to_string())
}

/// Asserts that the program in `source` exits with `expected`.
pub fn assert_exit_code(source: &str, expected: i32) {
    let code = compile_and_run(source)
        .unwrap_or_else(|e| panic!("compile_and_run failed for {:?}: {}", source, e));
    assert_eq!(code, expected, "wrong exit code for {:?}", source);
}
