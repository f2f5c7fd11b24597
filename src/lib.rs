//! The minic compiler library.
//!
//! This library provides the core components of the minic compiler:
//! lexical analysis, parsing, and x86-64 code generation.
//!
//! # Modules
//!
//! - [`token`] - Token types and source position tracking
//! - [`lexer`] - Lexical analysis (tokenization)
//! - [`ast`] - Abstract Syntax Tree definitions
//! - [`parser`] - Recursive descent parser
//! - [`codegen`] - Intel-syntax x86-64 assembly generation
//!
//! # Example
//!
//! ```
//! use minic::lexer::Lexer;
//! use minic::parser::Parser;
//! use minic::codegen::Codegen;
//!
//! // Source code to compile
//! let source = "int main() { return 42; }";
//!
//! // Lexical analysis
//! let tokens = Lexer::new(source).tokenize();
//!
//! // Parsing
//! let mut parser = Parser::new(&tokens);
//! let functions = parser.parse_file().expect("Parse error");
//!
//! // Code generation
//! let mut codegen = Codegen::new();
//! codegen.compile(&functions);
//! let asm = codegen.finish();
//!
//! assert!(asm.contains("main:"));
//! assert!(asm.contains("mov     eax, 42"));
//! ```

pub mod ast;
pub mod codegen;
pub mod lexer;
pub mod parser;
pub mod token;
