//! Token recognition for the lexer.
//!
//! This module provides methods for scanning identifiers, keywords,
//! integer literals, and operators. Whitespace and comments are assumed
//! to have been skipped already.

use super::Lexer;
use crate::token::{Token, TokenKind};

impl<'a> Lexer<'a> {
    /// Scans a maximal identifier run and classifies it.
    ///
    /// Exact matches of the seven keywords become their keyword kind;
    /// anything else is [`TokenKind::Identifier`].
    pub(super) fn scan_identifier(&mut self, start: usize, line: usize) -> Token<'a> {
        while self
            .peek()
            .is_some_and(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            self.advance();
        }

        let lexeme = &self.source[start..self.pos];
        let kind = keyword_kind(lexeme).unwrap_or(TokenKind::Identifier);
        Token::new(kind, lexeme, line)
    }

    /// Scans a maximal run of ASCII digits.
    ///
    /// The lexeme is kept as text; conversion to an `i32` value happens
    /// in the parser.
    pub(super) fn scan_number(&mut self, start: usize, line: usize) -> Token<'a> {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }

        Token::new(TokenKind::IntLiteral, &self.source[start..self.pos], line)
    }

    /// Scans an operator or delimiter starting with `c`.
    ///
    /// `=`, `!`, `<`, and `>` take one character of lookahead to form the
    /// two-character operators `==`, `!=`, `<=`, `>=`. A bare `!` and any
    /// unrecognized character produce [`TokenKind::Unknown`] tokens whose
    /// lexeme is a diagnostic message.
    pub(super) fn scan_operator(&mut self, c: char, start: usize, line: usize) -> Token<'a> {
        self.advance();

        let kind = match c {
            '(' => TokenKind::LeftParen,
            ')' => TokenKind::RightParen,
            '{' => TokenKind::LeftBrace,
            '}' => TokenKind::RightBrace,
            ';' => TokenKind::Semicolon,
            ',' => TokenKind::Comma,
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Star,
            '/' => TokenKind::Slash,
            '%' => TokenKind::Percent,
            '=' => self.with_equals(TokenKind::EqualEqual, TokenKind::Assign),
            '<' => self.with_equals(TokenKind::LessEqual, TokenKind::LessThan),
            '>' => self.with_equals(TokenKind::GreaterEqual, TokenKind::GreaterThan),
            '!' => {
                if self.peek() == Some('=') {
                    self.advance();
                    TokenKind::BangEqual
                } else {
                    return Token::new(TokenKind::Unknown, "Unexpected '!'", line);
                }
            }
            _ => return Token::new(TokenKind::Unknown, "Unexpected character.", line),
        };

        Token::new(kind, &self.source[start..self.pos], line)
    }

    /// Resolves a one-or-two-character operator: consumes a trailing `=`
    /// and returns `two`, or leaves the cursor alone and returns `one`.
    fn with_equals(&mut self, two: TokenKind, one: TokenKind) -> TokenKind {
        if self.peek() == Some('=') {
            self.advance();
            two
        } else {
            one
        }
    }
}

/// Returns the keyword kind for `text`, or `None` if it is not a keyword.
fn keyword_kind(text: &str) -> Option<TokenKind> {
    let kind = match text {
        "if" => TokenKind::If,
        "else" => TokenKind::Else,
        "while" => TokenKind::While,
        "for" => TokenKind::For,
        "return" => TokenKind::Return,
        "int" => TokenKind::Int,
        "void" => TokenKind::Void,
        _ => return None,
    };
    Some(kind)
}
