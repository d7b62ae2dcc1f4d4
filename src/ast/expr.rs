//! Expression nodes for the Lox AST.

use crate::token::{Span, Token};
use crate::value::Value;

/// The kind of an expression, without source location.
///
/// Use [`Expr`] for the full AST node with span information.
#[derive(Debug, Clone)]
pub enum ExprKind {
    /// `left op right` for arithmetic/comparison/equality operators.
    /// Both operands are always evaluated.
    Binary {
        left: Box<Expr>,
        op: Token,
        right: Box<Expr>,
    },

    /// `op right` for `-` (negate) and `!` (not).
    Unary { op: Token, right: Box<Expr> },

    /// A parenthesized expression. Kept distinct from its inner expression
    /// so an AST-printer can reproduce the original grouping.
    Grouping(Box<Expr>),

    /// A literal value baked in at parse time: a number, string, `true`,
    /// `false`, or `nil`.
    Literal(Value),

    /// A reference to a variable by name.
    Variable(Token),

    /// `name = value`. Only ever produced when the parser can prove the
    /// assignment target is a bare name.
    Assign { name: Token, value: Box<Expr> },

    /// `left and right` / `left or right`. Distinct from [`ExprKind::Binary`]
    /// because the right operand is not always evaluated.
    Logical {
        left: Box<Expr>,
        op: Token,
        right: Box<Expr>,
    },

    /// `callee(args...)`. `closing_paren` is kept for error reporting
    /// (arity mismatches are reported at the call site).
    Call {
        callee: Box<Expr>,
        closing_paren: Token,
        args: Vec<Expr>,
    },
}

/// An expression with its source location.
#[derive(Debug, Clone)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }
}
