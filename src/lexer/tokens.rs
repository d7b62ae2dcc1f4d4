//! Token reading and recognition for the lexer.

use super::Lexer;
use super::error::LexError;
use crate::token::{Span, Token, TokenKind};

impl<'a> Lexer<'a> {
    fn single_char_token(&mut self, kind: TokenKind, start_pos: usize, start_line: usize) -> Token {
        self.advance();
        let lexeme = &self.input[start_pos..self.pos];
        Token::new(kind, lexeme, Span::new(start_pos, self.pos, start_line))
    }

    /// Reads and returns the next token from the input.
    ///
    /// Assumes whitespace and comments have already been skipped and the
    /// input is not at EOF.
    pub(super) fn next_token(&mut self) -> Result<Token, LexError> {
        let c = self.current_char().expect("next_token called at EOF");
        let start_pos = self.pos;
        let start_line = self.line;

        if let Some(token) = self.next_punctuation_or_operator(c, start_pos, start_line) {
            return Ok(token);
        }

        if c == '"' {
            return self.read_string(start_pos, start_line);
        }

        if c.is_ascii_digit() {
            return Ok(self.read_number(start_pos, start_line));
        }

        if c.is_ascii_alphabetic() || c == '_' {
            return Ok(self.read_identifier(start_pos, start_line));
        }

        let span = Span::new(self.pos, self.pos + c.len_utf8(), self.line);
        self.advance();
        Err(LexError::unexpected_character(c, span))
    }

    fn next_punctuation_or_operator(
        &mut self,
        c: char,
        start_pos: usize,
        start_line: usize,
    ) -> Option<Token> {
        let token = match c {
            '(' => self.single_char_token(TokenKind::LeftParen, start_pos, start_line),
            ')' => self.single_char_token(TokenKind::RightParen, start_pos, start_line),
            '{' => self.single_char_token(TokenKind::LeftBrace, start_pos, start_line),
            '}' => self.single_char_token(TokenKind::RightBrace, start_pos, start_line),
            ',' => self.single_char_token(TokenKind::Comma, start_pos, start_line),
            '.' => self.single_char_token(TokenKind::Dot, start_pos, start_line),
            '-' => self.single_char_token(TokenKind::Minus, start_pos, start_line),
            '+' => self.single_char_token(TokenKind::Plus, start_pos, start_line),
            ';' => self.single_char_token(TokenKind::Semicolon, start_pos, start_line),
            '*' => self.single_char_token(TokenKind::Star, start_pos, start_line),
            '/' => self.single_char_token(TokenKind::Slash, start_pos, start_line),
            '!' => self.two_char_token(
                '=',
                TokenKind::BangEqual,
                TokenKind::Bang,
                start_pos,
                start_line,
            ),
            '=' => self.two_char_token(
                '=',
                TokenKind::EqualEqual,
                TokenKind::Equal,
                start_pos,
                start_line,
            ),
            '<' => self.two_char_token(
                '=',
                TokenKind::LessEqual,
                TokenKind::Less,
                start_pos,
                start_line,
            ),
            '>' => self.two_char_token(
                '=',
                TokenKind::GreaterEqual,
                TokenKind::Greater,
                start_pos,
                start_line,
            ),
            _ => return None,
        };
        Some(token)
    }

    /// Consumes a one-character operator, or two if `next` follows it.
    fn two_char_token(
        &mut self,
        next: char,
        two_char: TokenKind,
        one_char: TokenKind,
        start_pos: usize,
        start_line: usize,
    ) -> Token {
        self.advance();
        if self.current_char() == Some(next) {
            self.advance();
        } else {
            let lexeme = &self.input[start_pos..self.pos];
            return Token::new(one_char, lexeme, Span::new(start_pos, self.pos, start_line));
        }
        let lexeme = &self.input[start_pos..self.pos];
        Token::new(two_char, lexeme, Span::new(start_pos, self.pos, start_line))
    }

    /// Reads a string literal. The opening `"` must be at the current
    /// position. Escape sequences are not processed: the literal value is
    /// exactly the source text between the quotes.
    fn read_string(&mut self, start_pos: usize, start_line: usize) -> Result<Token, LexError> {
        self.advance(); // opening quote
        loop {
            match self.current_char() {
                Some('"') => {
                    let text = self.input[start_pos + 1..self.pos].to_string();
                    self.advance(); // closing quote
                    let lexeme = self.input[start_pos..self.pos].to_string();
                    let span = Span::new(start_pos, self.pos, start_line);
                    return Ok(Token::new(TokenKind::String(text), lexeme, span));
                }
                Some(_) => self.advance(),
                None => {
                    let span = Span::new(start_pos, self.pos, self.line);
                    return Err(LexError::unterminated_string(span));
                }
            }
        }
    }

    /// Reads a number literal: digits, optionally followed by `.` and more
    /// digits. A trailing `.` with no following digit is left unconsumed so
    /// it can be scanned as its own `Dot` token (e.g. `1.method()`-style
    /// call chains on a number literal are not valid Lox, but `1 .` is two
    /// tokens, not a malformed number).
    fn read_number(&mut self, start_pos: usize, start_line: usize) -> Token {
        while self.current_char().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }

        let has_fraction =
            self.current_char() == Some('.') && self.peek_next_char().is_some_and(|c| c.is_ascii_digit());

        if has_fraction {
            self.advance(); // consume '.'
            while self.current_char().is_some_and(|c| c.is_ascii_digit()) {
                self.advance();
            }
        }

        let lexeme = &self.input[start_pos..self.pos];
        let value: f64 = lexeme.parse().expect("number lexeme is valid f64 syntax");
        let span = Span::new(start_pos, self.pos, start_line);
        Token::new(TokenKind::Number(value), lexeme, span)
    }

    /// Reads an identifier, then resolves it against the keyword table.
    fn read_identifier(&mut self, start_pos: usize, start_line: usize) -> Token {
        while self
            .current_char()
            .is_some_and(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            self.advance();
        }

        let lexeme = &self.input[start_pos..self.pos];
        let kind = TokenKind::keyword(lexeme).unwrap_or_else(|| TokenKind::Identifier(lexeme.to_string()));
        let span = Span::new(start_pos, self.pos, start_line);
        Token::new(kind, lexeme, span)
    }
}
