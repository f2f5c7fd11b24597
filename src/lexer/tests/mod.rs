//! Unit tests for the lexer module.

use super::*;
use crate::token::TokenKind;

/// Helper to tokenize input and return only the kinds.
pub(super) fn lex_kinds(input: &str) -> Vec<TokenKind> {
    Lexer::new(input).tokenize().iter().map(|t| t.kind).collect()
}

/// Helper to tokenize input and return the tokens without the final Eof.
pub(super) fn lex(input: &str) -> Vec<Token<'_>> {
    let mut tokens = Lexer::new(input).tokenize();
    assert_eq!(
        tokens.last().map(|t| t.kind),
        Some(TokenKind::Eof),
        "token stream for {:?} did not end with Eof",
        input
    );
    tokens.pop();
    tokens
}
