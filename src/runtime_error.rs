//! Errors raised while evaluating an already-parsed program.

use crate::token::Span;

/// The closed set of ways evaluation can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeErrorKind {
    /// An operator was applied to operands of the wrong type.
    TypeMismatch,
    /// A `Variable` or `Assign` node named a binding that resolves nowhere
    /// in the current environment chain.
    UndefinedVariable,
    /// A `Call` expression's callee was not a function value.
    NotCallable,
    /// A `Call` expression passed a different number of arguments than the
    /// callee's declared arity.
    ArityMismatch,
}

/// An error raised while walking the AST.
///
/// Evaluation aborts the current top-level statement sequence as soon as
/// one of these is produced; it is caught only at the top level (or, in
/// the REPL, once per line).
#[derive(Debug)]
pub struct RuntimeError {
    pub message: String,
    pub kind: RuntimeErrorKind,
    pub span: Span,
}

impl RuntimeError {
    pub fn new(kind: RuntimeErrorKind, message: impl Into<String>, span: Span) -> Self {
        RuntimeError {
            message: message.into(),
            kind,
            span,
        }
    }

    pub fn type_mismatch(message: impl Into<String>, span: Span) -> Self {
        RuntimeError::new(RuntimeErrorKind::TypeMismatch, message, span)
    }

    pub fn undefined_variable(name: &str, span: Span) -> Self {
        RuntimeError::new(
            RuntimeErrorKind::UndefinedVariable,
            format!("Undefined variable '{name}'."),
            span,
        )
    }

    pub fn not_callable(span: Span) -> Self {
        RuntimeError::new(
            RuntimeErrorKind::NotCallable,
            "Can only call functions and classes.",
            span,
        )
    }

    pub fn arity_mismatch(expected: usize, got: usize, span: Span) -> Self {
        RuntimeError::new(
            RuntimeErrorKind::ArityMismatch,
            format!("Expected {expected} arguments but got {got}."),
            span,
        )
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}: {}", self.span.line, self.message)
    }
}

impl std::error::Error for RuntimeError {}
