//! Statement and function emission.

use super::{ARG_REGISTERS, Codegen};
use crate::ast::Node;

impl<'a> Codegen<'a> {
    /// Emits one function: label, prologue, parameter spills, body.
    ///
    /// The frame map is recreated for every function; offsets never leak
    /// between functions.
    pub(super) fn compile_function(&mut self, node: &Node<'a>) {
        let Node::FunctionDecl {
            name, params, body, ..
        } = node
        else {
            return;
        };

        self.frame = super::StackFrame::new();

        self.emit(format!("{}:", name.lexeme));
        self.emit("        push rbp");
        self.emit("        mov rbp, rsp");

        for (i, param) in params.iter().enumerate() {
            let Node::VarDecl { name, .. } = param else {
                continue;
            };
            let offset = self.frame.add(name.lexeme);
            if let Some(register) = ARG_REGISTERS.get(i) {
                self.emit(format!(
                    "        mov     DWORD PTR [rbp{:+}], {}",
                    offset, register
                ));
            }
        }

        self.compile_block(body);
    }

    /// Emits every statement of a block in order.
    pub(super) fn compile_block(&mut self, node: &Node<'a>) {
        let Node::Block { statements } = node else {
            return;
        };
        for statement in statements {
            self.compile_statement(statement);
        }
    }

    /// Dispatches one statement.
    ///
    /// Bare expressions, declarations, calls, and returns route to their
    /// emitters; a bare `VarDecl` just claims its stack slot. Anything
    /// else, including all control flow, is silently skipped.
    fn compile_statement(&mut self, node: &Node<'a>) {
        match node {
            Node::IntLiteral { .. } | Node::Variable { .. } | Node::Binary { .. } => {
                self.compile_expression(node);
            }
            Node::VarDecl { name, .. } => {
                self.frame.add(name.lexeme);
            }
            Node::Declaration { .. } => self.compile_declaration(node),
            Node::FunctionCall { .. } => self.compile_call(node),
            Node::Return { .. } => self.compile_return(node),
            _ => {}
        }
    }

    /// Emits a declaration or assignment.
    ///
    /// A `VarDecl` target claims its slot first, so the initialiser's
    /// store lands on the fresh offset. The value is materialised into
    /// `eax` and stored through the target's memory operand.
    fn compile_declaration(&mut self, node: &Node<'a>) {
        let Node::Declaration { target, value } = node else {
            return;
        };

        if let Node::VarDecl { name, .. } = target.as_ref() {
            self.frame.add(name.lexeme);
        }

        let Some(target_name) = target.name() else {
            return;
        };
        let operand = self.frame.operand(target_name);

        self.compile_expression(value);
        self.emit(format!("        mov     DWORD PTR {}, eax", operand));
    }

    /// Emits a return: the value into `eax`, then the epilogue.
    ///
    /// No `sub rsp` is ever emitted in the prologue, so there is nothing
    /// to unwind beyond restoring `rbp`.
    fn compile_return(&mut self, node: &Node<'a>) {
        let Node::Return { value } = node else {
            return;
        };
        self.compile_expression(value);
        self.emit("        pop rbp");
        self.emit("        ret");
    }
}
