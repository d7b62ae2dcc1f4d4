//! Structured diagnostics and the plain-text wire format user-visible output
//! is rendered in.
//!
//! The lexer, parser, and interpreter each report failures as their own
//! structured error type ([`crate::lexer::LexError`],
//! [`crate::parser::ParseError`], [`crate::runtime_error::RuntimeError`]).
//! This module is where those three get unified into one outcome and
//! formatted exactly the way the host is expected to print them — `[line N]
//! Error<where>: <msg>` for a compile error, `<msg>\n[line N]` for a runtime
//! error. Nothing here talks to a terminal or a file; a binary (or a test)
//! decides where the formatted text goes.

use crate::lexer::LexError;
use crate::parser::ParseError;
use crate::runtime_error::RuntimeError;
use crate::token::TokenKind;

/// A single failure from the lex or parse phase, reported before evaluation
/// ever starts.
#[derive(Debug)]
pub enum CompileDiagnostic {
    Lex(LexError),
    Parse(ParseError),
}

impl CompileDiagnostic {
    /// The 1-based source line this diagnostic points at.
    pub fn line(&self) -> usize {
        match self {
            CompileDiagnostic::Lex(err) => err.span.line,
            CompileDiagnostic::Parse(err) => err.token.line(),
        }
    }

    /// The `at end` / `at '<lexeme>'` / empty fragment a [`ParseError`]
    /// contributes. A [`LexError`] never carries one: it fires on a single
    /// character or an unterminated literal, neither of which is a token
    /// the parser could name.
    fn where_fragment(&self) -> String {
        match self {
            CompileDiagnostic::Lex(_) => String::new(),
            CompileDiagnostic::Parse(err) => {
                if matches!(err.token.kind, TokenKind::Eof) {
                    " at end".to_string()
                } else {
                    format!(" at '{}'", err.token.lexeme)
                }
            }
        }
    }

    fn message(&self) -> &str {
        match self {
            CompileDiagnostic::Lex(err) => &err.message,
            CompileDiagnostic::Parse(err) => &err.message,
        }
    }

    /// Renders this diagnostic in the one-line `[line N] Error<where>: <msg>`
    /// format.
    pub fn format(&self) -> String {
        format!("[line {}] Error{}: {}", self.line(), self.where_fragment(), self.message())
    }
}

/// Renders a runtime error in the two-line `<msg>\n[line N]` format.
pub fn format_runtime_error(error: &RuntimeError) -> String {
    format!("{}\n[line {}]", error.message, error.span.line)
}

/// The result of running one chunk of source through the full pipeline.
///
/// Mirrors spec's `run(source) -> {compile_errors, runtime_error}` contract:
/// a compile failure suppresses evaluation entirely (`CompileErrors` carries
/// every lex/parse error found, not just the first), while a runtime
/// failure means evaluation started and aborted partway through.
#[derive(Debug)]
pub enum Outcome {
    Ok,
    CompileErrors(Vec<CompileDiagnostic>),
    RuntimeError(RuntimeError),
}

impl Outcome {
    /// The process exit code this outcome maps to: 0 / 64 / 70, per
    /// `sysexits.h`'s `EX_USAGE` and `EX_SOFTWARE` conventions.
    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::Ok => 0,
            Outcome::CompileErrors(_) => 64,
            Outcome::RuntimeError(_) => 70,
        }
    }
}
