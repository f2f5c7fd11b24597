//! Cursor position management for the lexer.
//!
//! This module provides methods for inspecting and advancing the lexer's
//! position within the source.

use super::Lexer;

impl<'a> Lexer<'a> {
    /// Returns the current character without consuming it.
    ///
    /// Returns `None` at end of input.
    pub(super) fn peek(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    /// Returns the character one position past the cursor without
    /// consuming anything.
    pub(super) fn peek_next(&self) -> Option<char> {
        self.source[self.pos..].chars().nth(1)
    }

    /// Advances the cursor by one character.
    ///
    /// Handles multi-byte UTF-8 characters and increments the line
    /// counter on newlines.
    pub(super) fn advance(&mut self) {
        if let Some(c) = self.peek() {
            self.pos += c.len_utf8();
            if c == '\n' {
                self.line += 1;
            }
        }
    }
}
