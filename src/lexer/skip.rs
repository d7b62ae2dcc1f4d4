//! Whitespace and comment skipping for the lexer.

use super::Lexer;

impl<'a> Lexer<'a> {
    /// Skips whitespace and `//` line comments in a loop, so a comment
    /// followed by more whitespace followed by another comment is all
    /// consumed before the next token is read.
    pub(super) fn skip_whitespace_and_comments(&mut self) {
        loop {
            self.skip_whitespace();
            if !self.skip_comment() {
                break;
            }
        }
    }

    fn skip_whitespace(&mut self) {
        while self.current_char().is_some_and(|c| c == ' ' || c == '\r' || c == '\t' || c == '\n')
        {
            self.advance();
        }
    }

    /// Skips a `//` line comment, if one starts at the current position.
    fn skip_comment(&mut self) -> bool {
        if self.current_char() == Some('/') && self.peek_next_char() == Some('/') {
            while self.current_char().is_some_and(|c| c != '\n') {
                self.advance();
            }
            true
        } else {
            false
        }
    }
}
