//! Statement parsing: blocks, the statement dispatcher, and control flow.

use super::Parser;
use super::error::ParseError;
use crate::ast::Node;
use crate::token::TokenKind;

impl<'a> Parser<'a> {
    /// Parses a block.
    ///
    /// With a leading `{`, consumes statements until the matching `}`.
    /// Without one, parses exactly one statement and wraps it in a
    /// singleton block. Null statements (bare `;`, skipped tokens) are
    /// discarded.
    pub(super) fn parse_block(&mut self) -> Result<Node<'a>, ParseError> {
        let mut statements = Vec::new();

        if self.peek_kind() != TokenKind::LeftBrace {
            if let Some(statement) = self.parse_statement()? {
                statements.push(statement);
            }
            return Ok(Node::Block { statements });
        }

        self.advance();
        while self.peek_kind() != TokenKind::RightBrace && !self.is_eof() {
            if let Some(statement) = self.parse_statement()? {
                statements.push(statement);
            }
        }
        self.expect(TokenKind::RightBrace)?;

        Ok(Node::Block { statements })
    }

    /// Parses a single statement, dispatching on the leading token.
    ///
    /// Returns `Ok(None)` for null statements: a bare `;`, or any token
    /// that starts no known statement (consumed to guarantee progress).
    pub(super) fn parse_statement(&mut self) -> Result<Option<Node<'a>>, ParseError> {
        if self.peek_kind().is_type_keyword() {
            return self.parse_declaration_statement().map(Some);
        }

        match self.peek_kind() {
            TokenKind::Return => {
                self.advance();
                let value = self.parse_expression()?;
                self.expect(TokenKind::Semicolon)?;
                Ok(Some(Node::Return {
                    value: Box::new(value),
                }))
            }
            TokenKind::Semicolon => {
                self.advance();
                Ok(None)
            }
            TokenKind::If | TokenKind::Else => self.parse_if_elif_else().map(Some),
            TokenKind::While => self.parse_while().map(Some),
            TokenKind::Identifier => match self.peek_ahead_kind(1) {
                Some(TokenKind::Assign) => self.parse_assignment().map(Some),
                Some(TokenKind::LeftParen) => self.parse_function_call().map(Some),
                _ => {
                    self.advance();
                    Ok(None)
                }
            },
            _ => {
                self.advance();
                Ok(None)
            }
        }
    }

    /// Parses a declaration statement starting at a type keyword.
    ///
    /// A bare declaration (`int x;`) yields the [`Node::VarDecl`] itself,
    /// with the trailing `;` skipped. With an initialiser (`int x = e;`)
    /// the declaration and expression pair up in a [`Node::Declaration`].
    fn parse_declaration_statement(&mut self) -> Result<Node<'a>, ParseError> {
        let decl = self.parse_variable_declaration()?;

        if self.peek_kind() != TokenKind::Assign {
            // Bare declaration; skip the trailing ';'.
            self.advance();
            return Ok(decl);
        }

        self.advance();
        let value = self.parse_expression()?;
        self.expect(TokenKind::Semicolon)?;

        Ok(Node::Declaration {
            target: Box::new(decl),
            value: Box::new(value),
        })
    }

    /// Parses an assignment statement, rewritten as a declaration with a
    /// [`Node::Variable`] target.
    fn parse_assignment(&mut self) -> Result<Node<'a>, ParseError> {
        let name = self.peek();
        self.advance();
        self.advance(); // consume '='
        let value = self.parse_expression()?;

        Ok(Node::Declaration {
            target: Box::new(Node::Variable { name }),
            value: Box::new(value),
        })
    }

    /// Parses one part of an `if` / `else if` / `else` chain.
    ///
    /// Each part becomes its own peer node in the enclosing block:
    /// [`Node::If`] and [`Node::ElseIf`] carry a parenthesised condition,
    /// [`Node::Else`] has none. Nothing links the parts except their
    /// order.
    fn parse_if_elif_else(&mut self) -> Result<Node<'a>, ParseError> {
        enum Tag {
            If,
            ElseIf,
            Else,
        }

        let tag = if self.peek_kind() == TokenKind::If {
            self.advance();
            Tag::If
        } else {
            match self.peek_ahead_kind(1) {
                Some(TokenKind::If) => {
                    self.advance();
                    self.advance();
                    Tag::ElseIf
                }
                Some(TokenKind::LeftBrace) => {
                    self.advance();
                    Tag::Else
                }
                _ => return Err(self.error_expected("'if' or '{' after 'else'")),
            }
        };

        // A bare `else` has no condition.
        if let Tag::Else = tag {
            let body = self.parse_block()?;
            return Ok(Node::Else {
                body: Box::new(body),
            });
        }

        self.expect(TokenKind::LeftParen)?;
        let condition = self.parse_expression()?;
        self.expect(TokenKind::RightParen)?;
        let body = self.parse_block()?;

        let condition = Box::new(condition);
        let body = Box::new(body);
        Ok(if let Tag::If = tag {
            Node::If { condition, body }
        } else {
            Node::ElseIf { condition, body }
        })
    }

    /// Parses a while loop.
    fn parse_while(&mut self) -> Result<Node<'a>, ParseError> {
        self.advance();
        self.expect(TokenKind::LeftParen)?;
        let condition = self.parse_expression()?;
        self.expect(TokenKind::RightParen)?;
        let body = self.parse_block()?;

        Ok(Node::While {
            condition: Box::new(condition),
            body: Box::new(body),
        })
    }
}
