//! Expression materialisation.
//!
//! Every expression lands its result in `eax`. Binary expressions use
//! `edx` as the single scratch register for the right operand; there is
//! no spilling, so only trees with at most one compound side compute
//! correctly. The emission order (right operand, left operand, operator)
//! and the `first` flag are pinned by the test suite.

use super::{Codegen, op_mnemonic};
use crate::ast::Node;

impl<'a> Codegen<'a> {
    /// Emits code leaving the value of `node` in `eax`.
    ///
    /// Shapes other than literals, variables, calls, and binary
    /// expressions are silently skipped.
    pub(super) fn compile_expression(&mut self, node: &Node<'a>) {
        match node {
            Node::IntLiteral { value, .. } => {
                self.emit(format!("        mov     eax, {}", value));
            }
            Node::Variable { name } => {
                let operand = self.frame.operand(name.lexeme);
                self.emit(format!("        mov     eax, DWORD PTR {}", operand));
            }
            Node::FunctionCall { .. } => self.compile_call(node),
            Node::Binary { .. } => self.compile_binary(node, true),
            _ => {}
        }
    }

    /// Emits code for a binary expression.
    ///
    /// The right operand goes to `edx` when it is a literal or variable;
    /// anything else is materialised recursively into `eax` (with `first`
    /// set, so the inner operator uses `eax, edx` ordering). The left
    /// operand then loads into `eax`; other shapes are not supported on
    /// the left. Finally the operator combines the two: `op eax, edx` at
    /// the top of an expression, `op edx, eax` when nested.
    fn compile_binary(&mut self, node: &Node<'a>, first: bool) {
        let Node::Binary { left, op, right } = node else {
            return;
        };

        match right.as_ref() {
            Node::IntLiteral { value, .. } => {
                self.emit(format!("        mov     edx, {}", value));
            }
            Node::Variable { name } => {
                let operand = self.frame.operand(name.lexeme);
                self.emit(format!("        mov     edx, DWORD PTR {}", operand));
            }
            other => self.compile_expression(other),
        }

        match left.as_ref() {
            Node::IntLiteral { value, .. } => {
                self.emit(format!("        mov     eax, {}", value));
            }
            Node::Variable { name } => {
                let operand = self.frame.operand(name.lexeme);
                self.emit(format!("        mov     eax, DWORD PTR {}", operand));
            }
            _ => {}
        }

        if let Some(mnemonic) = op_mnemonic(*op) {
            if first {
                self.emit(format!("        {}     eax, edx", mnemonic));
            } else {
                self.emit(format!("        {}     edx, eax", mnemonic));
            }
        }
    }

    /// Emits a function call.
    ///
    /// Each argument is materialised into `eax` and moved into its
    /// argument register in order; the call instruction follows. After
    /// the call, `eax` holds the callee's return value. Arguments beyond
    /// the register table are materialised but get no register.
    pub(super) fn compile_call(&mut self, node: &Node<'a>) {
        let Node::FunctionCall { name, args } = node else {
            return;
        };

        for (i, arg) in args.iter().enumerate() {
            self.compile_expression(arg);
            if let Some(register) = super::ARG_REGISTERS.get(i) {
                self.emit(format!("        mov     {}, eax", register));
            }
        }

        self.emit(format!("        call    {}", name.lexeme));
    }
}
