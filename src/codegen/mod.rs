//! x86-64 code generation for the minic language.
//!
//! This module provides the [`Codegen`] struct which walks the AST and
//! emits Intel-syntax GNU-assembler text, line by line, into a single
//! program-wide instruction list.
//!
//! # Overview
//!
//! The generated program is freestanding: a fixed prologue defines
//! `_start`, calls `main`, and passes its return value to the `exit`
//! syscall. Each function then gets a label, a `push rbp` / `mov rbp,
//! rsp` prologue, parameter spills from the System V argument registers
//! into stack slots, and its body.
//!
//! Expressions always materialise into `eax`, with `edx` as the single
//! scratch register for binary right operands. There is no register
//! allocation and intermediate results are not spilled, so expression
//! trees with binary operators on both sides compute incorrectly; the
//! supported forms are pinned by the test suite.
//!
//! Control-flow nodes (`if` / `else if` / `else` / `while`) are parsed
//! but not emitted; the generator silently skips them along with any
//! other statement shape it does not understand.
//!
//! # Examples
//!
//! ```
//! use minic::lexer::Lexer;
//! use minic::parser::Parser;
//! use minic::codegen::Codegen;
//!
//! let tokens = Lexer::new("int main() { return 42; }").tokenize();
//! let functions = Parser::new(&tokens).parse_file().unwrap();
//!
//! let mut codegen = Codegen::new();
//! codegen.compile(&functions);
//! assert!(codegen.instructions().contains(&"main:".to_string()));
//! ```
//!
//! # Module Structure
//!
//! - [`frame`] - Per-function variable-to-offset map
//! - `expr` - Expression materialisation
//! - `stmt` - Statement and function emission
//! - `tests` - Unit tests (test-only)

mod expr;
mod frame;
mod stmt;

#[cfg(test)]
mod tests;

use crate::ast::Node;
use crate::token::TokenKind;
use frame::StackFrame;

/// The fixed program prologue: a freestanding `_start` that calls `main`
/// and exits with its return value. Always the first eight output lines.
const PROGRAM_PROLOGUE: [&str; 8] = [
    ".intel_syntax noprefix",
    ".global _start",
    ".text",
    "_start:",
    "    call main",
    "    mov rdi, rax       # syscall: exit",
    "    mov rax, 60        # exit code 0",
    "    syscall",
];

/// System V integer-argument registers, 32-bit forms, in call order.
// TODO: the fifth and sixth entries should be r8d and r9d.
const ARG_REGISTERS: [&str; 6] = ["edi", "esi", "edx", "ecx", "e8d", "e9d"];

/// Returns the mnemonic for a binary operator, or `None` for operators
/// the generator does not implement (`%` and the comparisons).
fn op_mnemonic(op: TokenKind) -> Option<&'static str> {
    match op {
        TokenKind::Plus => Some("add"),
        TokenKind::Minus => Some("sub"),
        TokenKind::Star => Some("imul"),
        TokenKind::Slash => Some("idiv"),
        _ => None,
    }
}

/// An x86-64 assembly generator.
///
/// `Codegen` owns the growing instruction list and one [`StackFrame`],
/// recreated for each function being compiled. Instructions are plain
/// strings; [`finish`](Codegen::finish) serialises them once at the end.
pub struct Codegen<'a> {
    /// The assembly lines emitted so far, in order.
    instructions: Vec<String>,
    /// The frame map of the function currently being compiled.
    frame: StackFrame<'a>,
}

impl<'a> Codegen<'a> {
    /// Creates an empty generator.
    pub fn new() -> Self {
        Codegen {
            instructions: Vec::new(),
            frame: StackFrame::new(),
        }
    }

    /// Compiles a list of top-level function definitions.
    ///
    /// Emits the program prologue first, then each function in order.
    /// Non-function nodes in the list are skipped.
    pub fn compile(&mut self, functions: &[Node<'a>]) {
        for line in PROGRAM_PROLOGUE {
            self.emit(line);
        }
        for function in functions {
            if let Node::FunctionDecl { .. } = function {
                self.compile_function(function);
            }
        }
    }

    /// Returns the emitted instruction lines.
    pub fn instructions(&self) -> &[String] {
        &self.instructions
    }

    /// Serialises the instruction list into the final assembly text,
    /// newline-terminated.
    pub fn finish(self) -> String {
        let mut out = self.instructions.join("\n");
        out.push('\n');
        out
    }

    /// Appends one assembly line.
    fn emit(&mut self, line: impl Into<String>) {
        self.instructions.push(line.into());
    }
}

impl Default for Codegen<'_> {
    fn default() -> Self {
        Self::new()
    }
}
