//! Function definition parsing.

use super::Parser;
use super::error::ParseError;
use crate::ast::Node;
use crate::token::TokenKind;

impl<'a> Parser<'a> {
    /// Parses a variable declaration: a type keyword followed by an
    /// identifier.
    ///
    /// Shared by parameter lists and declaration statements.
    pub(super) fn parse_variable_declaration(&mut self) -> Result<Node<'a>, ParseError> {
        if !self.peek_kind().is_type_keyword() {
            return Err(self.error_expected("a data type"));
        }
        let ty = self.peek();
        self.advance();

        if self.peek_kind() != TokenKind::Identifier {
            return Err(self.error_expected("an identifier"));
        }
        let name = self.peek();
        self.advance();

        Ok(Node::VarDecl { name, ty })
    }

    /// Parses a function definition.
    ///
    /// # Grammar
    ///
    /// ```text
    /// function → type IDENTIFIER "(" (var_decl ("," var_decl)*)? ")" block
    /// ```
    ///
    /// The caller has already verified the `type identifier (` prefix, so
    /// the type and name tokens are taken as-is. The body must be a
    /// braced block.
    pub(super) fn parse_function(&mut self) -> Result<Node<'a>, ParseError> {
        let return_type = self.peek();
        self.advance();

        let name = self.peek();
        self.advance();

        self.expect(TokenKind::LeftParen)?;

        let mut params = Vec::new();
        while self.peek_kind() != TokenKind::RightParen && !self.is_eof() {
            params.push(self.parse_variable_declaration()?);
            if self.peek_kind() == TokenKind::Comma {
                self.advance();
            }
        }
        self.expect(TokenKind::RightParen)?;

        if self.peek_kind() != TokenKind::LeftBrace {
            return Err(self.error_expected("'{' after function parameters"));
        }
        let body = self.parse_block()?;

        Ok(Node::FunctionDecl {
            name,
            return_type,
            params,
            body: Box::new(body),
        })
    }
}
