//! Whitespace and comment skipping for the lexer.

use super::Lexer;

impl<'a> Lexer<'a> {
    /// Skips whitespace and line comments until the next significant
    /// character.
    ///
    /// Spaces, tabs, and carriage returns are consumed silently; newlines
    /// additionally advance the line counter (inside [`advance`]). A `//`
    /// sequence starts a comment running to the end of the line. A lone
    /// `/` is left in place for the operator scanner.
    ///
    /// [`advance`]: Lexer::advance
    pub(super) fn skip_whitespace(&mut self) {
        loop {
            match self.peek() {
                Some(' ' | '\r' | '\t' | '\n') => self.advance(),
                Some('/') if self.peek_next() == Some('/') => {
                    while self.peek().is_some_and(|c| c != '\n') {
                        self.advance();
                    }
                }
                _ => return,
            }
        }
    }
}
