//! Abstract Syntax Tree definitions for Lox.
//!
//! The AST is produced by [`crate::parser`] and consumed directly by
//! [`crate::interpreter`] via pattern matching — there is no visitor
//! dispatch layer.
//!
//! # Module Structure
//!
//! - [`expr`] - Expression nodes and kinds
//! - [`stmt`] - Statement nodes and kinds, including [`stmt::FunctionDecl`]
//!
//! # See Also
//!
//! * [`crate::parser`] - Produces the AST from tokens
//! * [`crate::interpreter`] - Walks the AST to produce values and effects

mod expr;
mod stmt;

pub use expr::{Expr, ExprKind};
pub use stmt::{FunctionDecl, Stmt, StmtKind};
