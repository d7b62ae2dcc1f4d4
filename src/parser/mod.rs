//! Parser for the Lox programming language.
//!
//! This module provides the [`Parser`] struct which transforms a token
//! stream into a list of top-level statements.
//!
//! # Overview
//!
//! The parser implements recursive descent with one method per precedence
//! level for expressions. It consumes tokens produced by [`crate::lexer`]
//! and builds an AST consumed directly by [`crate::interpreter`] via
//! pattern matching — there is no separate resolution or type-checking
//! pass.
//!
//! # Grammar
//!
//! ```text
//! program     → declaration* EOF
//! declaration → fun_decl | var_decl | statement
//! fun_decl    → "fun" IDENTIFIER "(" parameters? ")" block
//! var_decl    → "var" IDENTIFIER ( "=" expression )? ";"
//! parameters  → IDENTIFIER ( "," IDENTIFIER )*
//! statement   → expr_stmt | print_stmt | return_stmt | if_stmt
//!             | while_stmt | for_stmt | block
//! expr_stmt   → expression ";"
//! print_stmt  → "print" expression ";"
//! return_stmt → "return" expression? ";"
//! if_stmt     → "if" "(" expression ")" statement ( "else" statement )?
//! while_stmt  → "while" "(" expression ")" statement
//! for_stmt    → "for" "(" ( var_decl | expr_stmt | ";" )
//!               expression? ";" expression? ")" statement
//! block       → "{" declaration* "}"
//!
//! expression  → assignment
//! assignment  → IDENTIFIER "=" assignment | logic_or
//! logic_or    → logic_and ( "or" logic_and )*
//! logic_and   → equality ( "and" equality )*
//! equality    → comparison ( ( "!=" | "==" ) comparison )*
//! comparison  → term ( ( ">" | ">=" | "<" | "<=" ) term )*
//! term        → factor ( ( "-" | "+" ) factor )*
//! factor      → unary ( ( "/" | "*" ) unary )*
//! unary       → ( "!" | "-" ) unary | call
//! call        → primary ( "(" arguments? ")" )*
//! arguments   → expression ( "," expression )*
//! primary     → NUMBER | STRING | "true" | "false" | "nil"
//!             | IDENTIFIER | "(" expression ")"
//! ```
//!
//! # Error recovery
//!
//! A [`Parser::parse`] call does not stop at the first syntax error. Each
//! failed [`parse_declaration`](Parser::parse_declaration) call is
//! followed by [`synchronize`](Parser::synchronize), which discards tokens
//! until a `;` has been consumed or the next token plausibly starts a new
//! declaration or statement. This lets one source file report every syntax
//! error it contains in a single pass, the same way [`crate::lexer::Lexer`]
//! accumulates lexical errors rather than stopping at the first one. The
//! same recover-and-continue loop runs inside block and function bodies, so
//! an error on one declaration inside a block does not discard the
//! declarations that follow it.
//!
//! A few error kinds are non-fatal on their own: an invalid assignment
//! target, or a parameter/argument list past the 255-element limit, is
//! recorded into the parser's error list without unwinding the production
//! currently being parsed.
//!
//! # Module Structure
//!
//! - [`error`] - Parse error types
//! - `helpers` - Token navigation and basic parsing operations
//! - `stmt` - Statement and declaration parsing
//! - `expr` - Expression parsing
//! - `tests` - Unit tests (test-only)
//!
//! # See Also
//!
//! * [`crate::lexer`] - Produces the token stream consumed by the parser
//! * [`crate::ast`] - Defines the AST types produced by the parser
//! * [`crate::interpreter`] - Consumes the AST to evaluate a program

mod error;
mod expr;
mod helpers;
mod stmt;

#[cfg(test)]
mod tests;

pub use error::{ParseError, ParseErrorKind};

use crate::ast::Stmt;
use crate::token::Token;

/// A recursive descent parser for the Lox language.
///
/// The parser maintains a position within the token stream and provides
/// methods to parse various grammar productions.
///
/// # Usage
///
/// Create a parser with [`Parser::new`], then call [`Parser::parse`] to
/// produce a list of statements.
pub struct Parser {
    /// The token stream to parse.
    tokens: Vec<Token>,
    /// Current position in the token stream.
    pos: usize,
    /// Errors collected so far: both genuine recovery points (pushed by
    /// [`parse`](Self::parse) and [`parse_block_statements`]) and non-fatal
    /// errors recorded in place by the production that found them.
    errors: Vec<ParseError>,
}

impl Parser {
    /// Creates a new parser from a token list.
    ///
    /// # Panics
    /// Panics if the token list is empty. [`crate::lexer::Lexer::tokenize`]
    /// always produces at least an `Eof` token.
    pub fn new(tokens: Vec<Token>) -> Self {
        assert!(!tokens.is_empty(), "token list must not be empty");
        Parser {
            tokens,
            pos: 0,
            errors: Vec::new(),
        }
    }

    /// Parses the entire token stream, returning every statement that
    /// parsed successfully alongside every error encountered.
    ///
    /// A declaration that fails to parse contributes no statement (rather
    /// than aborting the whole parse): [`synchronize`](Self::synchronize)
    /// realigns at the next plausible declaration boundary and parsing
    /// continues from there.
    pub fn parse(&mut self) -> (Vec<Stmt>, Vec<ParseError>) {
        let mut statements = Vec::new();

        while !self.is_eof() {
            match self.parse_declaration() {
                Ok(stmt) => statements.push(stmt),
                Err(err) => {
                    self.errors.push(err);
                    self.synchronize();
                }
            }
        }

        (statements, std::mem::take(&mut self.errors))
    }
}
