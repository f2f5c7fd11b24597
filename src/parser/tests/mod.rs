//! Unit tests for parsing.
//!
//! Tests are organized by parser component:
//! - `fn_def`: function definitions and parameter lists
//! - `stmt`: statement dispatch, blocks, control flow
//! - `expr`: expressions, calls, numeric conversion
//! - `errors`: error detection and message quality

use super::*;
use crate::lexer::Lexer;
use crate::token::{Token, TokenKind};


/// Lexes `input` and returns the token stream.
pub(super) fn lex(input: &str) -> Vec<Token<'_>> {
    Lexer::new(input).tokenize()
}

/// Parses a token stream and returns the top-level functions.
pub(super) fn parse<'a>(tokens: &'a [Token<'a>]) -> Vec<Node<'a>> {
    let mut parser = Parser::new(tokens);
    parser
        .parse_file()
        .unwrap_or_else(|e| panic!("parse failed: {}", e))
}

/// Parses a token stream and returns the error it produces.
pub(super) fn parse_error<'a>(tokens: &'a [Token<'a>]) -> ParseError {
    let mut parser = Parser::new(tokens);
    match parser.parse_file() {
        Ok(functions) => panic!(
            "expected parsing to fail, but it produced {} function(s)",
            functions.len()
        ),
        Err(e) => e,
    }
}

/// Returns the body statements of the single function in `functions`.
pub(super) fn body_of<'n, 'a>(functions: &'n [Node<'a>]) -> &'n [Node<'a>] {
    assert_eq!(functions.len(), 1, "expected exactly one function");
    let Node::FunctionDecl { body, .. } = &functions[0] else {
        panic!("expected a function declaration");
    };
    let Node::Block { statements } = body.as_ref() else {
        panic!("function body is not a block");
    };
    statements
}
