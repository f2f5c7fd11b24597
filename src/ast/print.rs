//! Indented AST pretty-printer.
//!
//! Renders the tree in a human-readable indented form, one construct per
//! line. Used by the `ast` debug subcommand.

use std::fmt::Write;

use super::Node;

/// Formats a forest of top-level nodes as an indented tree.
pub fn format_ast(nodes: &[Node<'_>]) -> String {
    let mut out = String::from("Printing AST for the entire file:\n");
    for (i, node) in nodes.iter().enumerate() {
        let _ = write!(out, "\n--- AST Node {} ---\n", i);
        write_node(&mut out, node, 0);
    }
    out
}

fn indent(out: &mut String, level: usize) {
    for _ in 0..level {
        out.push_str("  ");
    }
}

fn write_node(out: &mut String, node: &Node<'_>, level: usize) {
    indent(out, level);
    match node {
        Node::IntLiteral { value, .. } => {
            let _ = writeln!(out, "IntLiteral: {}", value);
        }
        Node::Variable { name } => {
            let _ = writeln!(out, "Variable: {}", name.lexeme);
        }
        Node::VarDecl { name, ty } => {
            let _ = writeln!(
                out,
                "Variable Declaration: {} of type {}",
                name.lexeme, ty.lexeme
            );
        }
        Node::Binary { left, op, right } => {
            let _ = writeln!(out, "Binary Expression: '{}'", op.name());
            labelled(out, "Left:", left, level);
            labelled(out, "Right:", right, level);
        }
        Node::Unary { op, operand } => {
            let _ = writeln!(out, "Unary Expression: '{}'", op);
            labelled(out, "Operand:", operand, level);
        }
        Node::Declaration { target, value } => {
            out.push_str("Declaration:\n");
            labelled(out, "Target:", target, level);
            labelled(out, "Expression:", value, level);
        }
        Node::Block { statements } => {
            let _ = writeln!(out, "Block with {} statement(s):", statements.len());
            for statement in statements {
                write_node(out, statement, level + 1);
            }
        }
        Node::FunctionDecl {
            name,
            return_type,
            params,
            body,
        } => {
            let _ = writeln!(
                out,
                "Function Declaration: {} returns {}",
                name.lexeme, return_type.lexeme
            );
            indent(out, level + 1);
            let _ = writeln!(out, "Parameters ({}):", params.len());
            for param in params {
                write_node(out, param, level + 2);
            }
            labelled(out, "Body Statements:", body, level);
        }
        Node::FunctionCall { name, args } => {
            let _ = writeln!(
                out,
                "Function Call: {} with {} argument(s)",
                name.lexeme,
                args.len()
            );
            for arg in args {
                write_node(out, arg, level + 1);
            }
        }
        Node::If { condition, body } => {
            out.push_str("If Statement:\n");
            labelled(out, "Condition:", condition, level);
            labelled(out, "Body:", body, level);
        }
        Node::ElseIf { condition, body } => {
            out.push_str("Else If Statement:\n");
            labelled(out, "Condition:", condition, level);
            labelled(out, "Body:", body, level);
        }
        Node::Else { body } => {
            out.push_str("Else Statement:\n");
            labelled(out, "Body:", body, level);
        }
        Node::While { condition, body } => {
            out.push_str("While Statement:\n");
            labelled(out, "Condition:", condition, level);
            labelled(out, "Body:", body, level);
        }
        Node::Return { value } => {
            out.push_str("Return Statement:\n");
            labelled(out, "Expression:", value, level);
        }
    }
}

/// Writes an indented label line followed by the child two levels in.
fn labelled(out: &mut String, label: &str, child: &Node<'_>, level: usize) {
    indent(out, level + 1);
    out.push_str(label);
    out.push('\n');
    write_node(out, child, level + 2);
}
