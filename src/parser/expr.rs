//! Expression parsing.
//!
//! The expression grammar is deliberately minimal: a primary operand
//! optionally followed by an operator and a recursively parsed right-hand
//! side. That makes every operator right-associative and ignores
//! precedence (`a - b - c` parses as `a - (b - c)`); a precedence-climbing
//! layer is future work.

use super::Parser;
use super::error::ParseError;
use crate::ast::Node;
use crate::token::{Token, TokenKind};

impl<'a> Parser<'a> {
    /// Parses an expression.
    ///
    /// A primary is a function call when the next-but-one token is `(`,
    /// otherwise a variable or integer literal. If the token after the
    /// primary is neither `)` nor `;`, it is taken as a binary operator
    /// and the rest of the expression is parsed recursively as the right
    /// operand.
    pub(super) fn parse_expression(&mut self) -> Result<Node<'a>, ParseError> {
        let node = if self.peek_ahead_kind(1) == Some(TokenKind::LeftParen) {
            self.parse_function_call()?
        } else {
            self.parse_operand()?
        };

        if matches!(
            self.peek_kind(),
            TokenKind::RightParen | TokenKind::Semicolon
        ) {
            return Ok(node);
        }

        let op = self.peek_kind();
        self.advance();
        let right = self.parse_expression()?;

        Ok(Node::Binary {
            left: Box::new(node),
            op,
            right: Box::new(right),
        })
    }

    /// Parses a variable or integer literal operand.
    pub(super) fn parse_operand(&mut self) -> Result<Node<'a>, ParseError> {
        match self.peek_kind() {
            TokenKind::Identifier => {
                let name = self.peek();
                self.advance();
                Ok(Node::Variable { name })
            }
            TokenKind::IntLiteral => {
                let token = self.peek();
                let value = self.convert_token_to_int(token)?;
                self.advance();
                Ok(Node::IntLiteral { value, token })
            }
            _ => Err(self.error_expected("a variable or integer literal")),
        }
    }

    /// Parses a function call: the callee identifier followed by a
    /// parenthesised, comma-separated list of operands.
    ///
    /// Arguments are restricted to variables and literals.
    pub(super) fn parse_function_call(&mut self) -> Result<Node<'a>, ParseError> {
        let name = self.peek();
        self.advance();

        self.expect(TokenKind::LeftParen)?;

        let mut args = Vec::new();
        while self.peek_kind() != TokenKind::RightParen {
            args.push(self.parse_operand()?);
            if self.peek_kind() == TokenKind::RightParen {
                break;
            }
            if self.peek_kind() == TokenKind::Comma {
                self.advance();
            } else {
                return Err(self.error_expected("',' or ')' in argument list"));
            }
        }
        self.expect(TokenKind::RightParen)?;

        Ok(Node::FunctionCall { name, args })
    }

    /// Converts an integer literal token to a signed 32-bit value.
    ///
    /// Out-of-range values are structural errors; there is no wrapping.
    fn convert_token_to_int(&self, token: &Token<'_>) -> Result<i32, ParseError> {
        token.lexeme.parse::<i32>().map_err(|_| {
            ParseError::new(
                format!(
                    "Integer literal '{}' out of range at token index {}",
                    token.lexeme, self.pos
                ),
                token.line,
            )
        })
    }
}
