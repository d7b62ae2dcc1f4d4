//! A tree-walking interpreter for the Lox programming language.
//!
//! This library provides the core components of the interpreter: lexical
//! analysis, parsing, and evaluation.
//!
//! # Modules
//!
//! - [`token`] - Token types and source location tracking
//! - [`lexer`] - Lexical analysis (tokenization)
//! - [`parser`] - Recursive descent parser
//! - [`ast`] - Abstract Syntax Tree definitions
//! - [`value`] - Runtime value representation
//! - [`environment`] - Lexically scoped name-to-value bindings
//! - [`runtime_error`] - Errors raised while evaluating a program
//! - [`interpreter`] - Tree-walking evaluator
//! - [`diagnostics`] - Unifies lex/parse/runtime errors into one outcome
//!
//! # Example
//!
//! ```
//! use lox::lexer::Lexer;
//! use lox::parser::Parser;
//! use lox::interpreter::Interpreter;
//!
//! let source = r#"print "Hello, world!";"#;
//!
//! // Lexical analysis
//! let (tokens, lex_errors) = Lexer::new(source).tokenize();
//! assert!(lex_errors.is_empty());
//!
//! // Parsing
//! let (program, parse_errors) = Parser::new(tokens).parse();
//! assert!(parse_errors.is_empty());
//!
//! // Evaluation
//! let mut output = Vec::new();
//! Interpreter::new().run(&program, &mut output).expect("runtime error");
//! assert_eq!(output, b"Hello, world!\n");
//! ```

pub mod ast;
pub mod diagnostics;
pub mod environment;
pub mod interpreter;
pub mod lexer;
pub mod parser;
pub mod runtime_error;
pub mod token;
pub mod value;
