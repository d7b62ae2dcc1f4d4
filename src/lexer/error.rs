//! Lexical analysis error types.

use crate::token::Span;

/// The closed set of ways scanning can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexErrorKind {
    /// A character that starts no valid token.
    UnexpectedCharacter,
    /// A string literal whose closing `"` was never found.
    UnterminatedString,
}

/// An error produced while scanning a single token.
///
/// Scanning never stops at the first `LexError` — the lexer records it and
/// keeps going, so a source file can surface every lexical mistake in one
/// pass instead of one-at-a-time.
#[derive(Debug)]
pub struct LexError {
    /// A human-readable description of the error.
    pub message: String,
    /// Which kind of lexical error this is.
    pub kind: LexErrorKind,
    /// The source location where the error occurred.
    pub span: Span,
}

impl LexError {
    pub(super) fn unexpected_character(c: char, span: Span) -> Self {
        LexError {
            message: format!("Unexpected character: {c}"),
            kind: LexErrorKind::UnexpectedCharacter,
            span,
        }
    }

    pub(super) fn unterminated_string(span: Span) -> Self {
        LexError {
            message: "Unterminated string".to_string(),
            kind: LexErrorKind::UnterminatedString,
            span,
        }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}: {}", self.span.line, self.message)
    }
}

impl std::error::Error for LexError {}
