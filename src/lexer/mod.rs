//! Lexical analyzer for Lox source code.
//!
//! # Overview
//!
//! The lexer scans source text into a flat token stream terminated by a
//! single [`TokenKind::Eof`]. Lexical errors (an unexpected character, an
//! unterminated string) do not stop scanning: [`Lexer::tokenize`] collects
//! every [`LexError`] it encounters alongside the tokens it still manages to
//! produce, so a caller can report every mistake in a source file in one
//! pass rather than one at a time.
//!
//! # Module Structure
//!
//! - [`error`] - Error types for lexical analysis
//! - [`cursor`] - Position tracking and character navigation
//! - [`skip`] - Whitespace and comment handling
//! - [`tokens`] - Token recognition and reading
//!
//! # See Also
//!
//! * [`crate::token`] - Token type definitions
//! * [`crate::parser`] - Parser that consumes the token stream

mod cursor;
mod error;
mod skip;
mod tokens;

#[cfg(test)]
mod tests;

pub use error::{LexError, LexErrorKind};

use crate::token::{Span, Token, TokenKind};

/// A lexical analyzer that tokenizes Lox source code.
///
/// Designed to be used once per source string; construct a new `Lexer` for
/// each call to [`tokenize`](Lexer::tokenize).
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
    line: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a new `Lexer` over `input`, starting at line 1.
    pub fn new(input: &'a str) -> Self {
        Lexer {
            input,
            pos: 0,
            line: 1,
        }
    }

    /// Scans the entire input, returning every token produced and every
    /// lexical error encountered along the way.
    ///
    /// The token vector always ends with exactly one [`TokenKind::Eof`],
    /// even when errors occurred.
    pub fn tokenize(&mut self) -> (Vec<Token>, Vec<LexError>) {
        let mut tokens = Vec::new();
        let mut errors = Vec::new();

        loop {
            self.skip_whitespace_and_comments();

            if self.is_eof() {
                tokens.push(Token::new(TokenKind::Eof, "", Span::new(self.pos, self.pos, self.line)));
                break;
            }

            match self.next_token() {
                Ok(token) => tokens.push(token),
                Err(err) => errors.push(err),
            }
        }

        (tokens, errors)
    }
}
