//! Parser helper methods for token navigation and basic operations.

use super::Parser;
use super::error::ParseError;
use crate::token::{Token, TokenKind};

/// Returns a user-friendly display string for a token kind.
pub(super) fn kind_display(kind: TokenKind) -> &'static str {
    match kind {
        TokenKind::Eof => "end of file",
        TokenKind::IntLiteral => "an integer literal",
        TokenKind::Identifier => "an identifier",
        TokenKind::If => "'if'",
        TokenKind::Else => "'else'",
        TokenKind::While => "'while'",
        TokenKind::For => "'for'",
        TokenKind::Return => "'return'",
        TokenKind::Int => "'int'",
        TokenKind::Void => "'void'",
        TokenKind::Plus => "'+'",
        TokenKind::Minus => "'-'",
        TokenKind::Star => "'*'",
        TokenKind::Slash => "'/'",
        TokenKind::Percent => "'%'",
        TokenKind::Assign => "'='",
        TokenKind::EqualEqual => "'=='",
        TokenKind::BangEqual => "'!='",
        TokenKind::LessThan => "'<'",
        TokenKind::GreaterThan => "'>'",
        TokenKind::LessEqual => "'<='",
        TokenKind::GreaterEqual => "'>='",
        TokenKind::Semicolon => "';'",
        TokenKind::Comma => "','",
        TokenKind::LeftParen => "'('",
        TokenKind::RightParen => "')'",
        TokenKind::LeftBrace => "'{'",
        TokenKind::RightBrace => "'}'",
        TokenKind::Unknown => "an unrecognized token",
    }
}

impl<'a> Parser<'a> {
    /// Returns a display string for a token, quoting identifier and
    /// literal lexemes.
    pub(super) fn token_display(token: &Token<'_>) -> String {
        match token.kind {
            TokenKind::Identifier => format!("identifier '{}'", token.lexeme),
            TokenKind::IntLiteral => format!("integer '{}'", token.lexeme),
            _ => kind_display(token.kind).to_string(),
        }
    }

    /// Returns a reference to the current token.
    ///
    /// Safe to call at any time: past the end it returns the last token,
    /// which is always `Eof`.
    pub(super) fn peek(&self) -> &'a Token<'a> {
        let idx = self.pos.min(self.tokens.len() - 1);
        &self.tokens[idx]
    }

    /// Returns the kind of the current token.
    pub(super) fn peek_kind(&self) -> TokenKind {
        self.peek().kind
    }

    /// Returns the kind of the token `forward` positions ahead, or `None`
    /// past the end of the stream.
    pub(super) fn peek_ahead_kind(&self, forward: usize) -> Option<TokenKind> {
        self.tokens.get(self.pos + forward).map(|t| t.kind)
    }

    /// Returns `true` if the current token is `Eof`.
    pub(super) fn is_eof(&self) -> bool {
        self.peek_kind() == TokenKind::Eof
    }

    /// Advances to the next token. Does nothing at `Eof`.
    pub(super) fn advance(&mut self) {
        if !self.is_eof() {
            self.pos += 1;
        }
    }

    /// Builds a parse error at the current token, naming what was
    /// expected, what was found, and the token index.
    pub(super) fn error_expected(&self, expected: &str) -> ParseError {
        ParseError::new(
            format!(
                "Expected {}, found {} at token index {}",
                expected,
                Self::token_display(self.peek()),
                self.pos
            ),
            self.peek().line,
        )
    }

    /// Expects the current token to be `expected` and consumes it.
    pub(super) fn expect(&mut self, expected: TokenKind) -> Result<(), ParseError> {
        if self.peek_kind() == expected {
            self.advance();
            Ok(())
        } else {
            Err(self.error_expected(kind_display(expected)))
        }
    }
}
