//! Tree-walking evaluator for the Lox programming language.
//!
//! This module provides the [`Interpreter`] struct which walks the AST
//! produced by [`crate::parser`] directly, without a separate compilation
//! or resolution pass.
//!
//! # Overview
//!
//! Evaluation happens by recursive pattern matching over [`crate::ast::Expr`]
//! and [`crate::ast::Stmt`]:
//!
//! - [`expr`] evaluates an expression to a [`crate::value::Value`]
//! - [`stmt`] executes a statement for its effects (printing, binding,
//!   looping, calling) and reports whether it fell off the end normally or
//!   hit a `return`
//!
//! # Control flow
//!
//! `return` is not implemented with a native Rust exception. Executing a
//! statement produces an [`ExecutionSignal`]: `Normal` to keep running the
//! enclosing block, or `Return(value)` to unwind to the nearest function
//! call boundary. Every statement-sequence executor (blocks, `if` branches,
//! `while` bodies) checks this signal after each statement and stops early
//! on `Return`, propagating it outward one level at a time.
//!
//! # Module Structure
//!
//! - [`expr`] - Expression evaluation
//! - [`stmt`] - Statement execution and function calls
//! - `tests` - Unit tests (test-only)
//!
//! # See Also
//!
//! * [`crate::ast`] - The AST types consumed by this module
//! * [`crate::environment`] - Lexical scoping backing `Interpreter`
//! * [`crate::runtime_error`] - Errors this module can produce

mod expr;
mod stmt;


use std::io::Write;

use crate::ast::Stmt;
use crate::diagnostics::{CompileDiagnostic, Outcome};
use crate::environment::Environment;
use crate::lexer::Lexer;
use crate::parser::Parser;
use crate::runtime_error::RuntimeError;
use crate::value::Value;

/// How a statement (or statement sequence) finished.
///
/// `Return` carries the value all the way up through every enclosing
/// block/if/while executor until it reaches the function call that invoked
/// this statement sequence in the first place.
#[derive(Debug)]
pub(crate) enum ExecutionSignal {
    Normal,
    Return(Value),
}

/// Walks an already-parsed program, evaluating it for effect.
///
/// Holds the global scope and the scope currently in effect. Both are
/// [`Environment`] handles, so entering a block or a function call only
/// needs a cheap child-frame allocation, not a deep copy of outer bindings.
pub struct Interpreter {
    globals: Environment,
    environment: Environment,
}

impl Interpreter {
    pub fn new() -> Self {
        let globals = Environment::global();
        Interpreter {
            environment: globals.clone(),
            globals,
        }
    }

    /// Runs every statement in `program` in order, writing `print` output to
    /// `out`. Stops at the first runtime error.
    ///
    /// A top-level `return` is legal per the grammar (it is not restricted
    /// to function bodies) and simply ends the run early, the same as
    /// falling off the end of `program`.
    pub fn run(&mut self, program: &[Stmt], out: &mut dyn Write) -> Result<(), RuntimeError> {
        for stmt in program {
            match self.execute(stmt, out)? {
                ExecutionSignal::Normal => {}
                ExecutionSignal::Return(_) => break,
            }
        }
        Ok(())
    }

    /// Lexes, parses, and (if both succeed) evaluates `source`, writing
    /// `print` output to `out`.
    ///
    /// A lex or parse error suppresses evaluation entirely: every error
    /// from both phases is collected into one [`Outcome::CompileErrors`]
    /// rather than stopping at the first. This is the entry point a host
    /// (CLI, REPL, or test) calls instead of driving [`Lexer`], [`Parser`],
    /// and [`Interpreter::run`] by hand; calling it repeatedly on the same
    /// `Interpreter` is exactly how a REPL keeps one persistent global
    /// environment across lines while still getting a clean slate of
    /// compile errors each time.
    pub fn run_source(&mut self, source: &str, out: &mut dyn Write) -> Outcome {
        let (tokens, lex_errors) = Lexer::new(source).tokenize();
        let (statements, parse_errors) = Parser::new(tokens).parse();

        if !lex_errors.is_empty() || !parse_errors.is_empty() {
            let diagnostics = lex_errors
                .into_iter()
                .map(CompileDiagnostic::Lex)
                .chain(parse_errors.into_iter().map(CompileDiagnostic::Parse))
                .collect();
            return Outcome::CompileErrors(diagnostics);
        }

        match self.run(&statements, out) {
            Ok(()) => Outcome::Ok,
            Err(error) => Outcome::RuntimeError(error),
        }
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Interpreter::new()
    }
}
