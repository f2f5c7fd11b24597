//! Abstract Syntax Tree definitions for the minic language.
//!
//! This module defines the data structures that represent parsed minic
//! programs. The AST is produced by the [`crate::parser`] and consumed
//! read-only by the [`crate::codegen`].
//!
//! # Structure
//!
//! The whole tree is one tagged sum type, [`Node`], with a variant per
//! construct: expressions, declarations, statements, and function
//! definitions all share the same tag space. Children are owned by their
//! parent; leaf nodes borrow their tokens from the token array, which has
//! to outlive the tree.
//!
//! A notable encoding choice: `if` / `else if` / `else` chains are not
//! nested. The parser emits the three parts as *peer* statements of the
//! enclosing block, and their order carries the chain semantics.
//!
//! # Module Structure
//!
//! - [`node`] - The [`Node`] enum
//! - [`print`] - Indented tree printer
//!
//! # See Also
//!
//! * [`crate::parser`] - Produces the AST from tokens
//! * [`crate::codegen`] - Generates assembly from the AST

mod node;
mod print;

pub use node::Node;
pub use print::format_ast;
