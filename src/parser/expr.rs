//! Expression parsing: one method per precedence level, from `assignment`
//! (lowest) down to `primary` (highest), per the grammar in the module doc.

use crate::ast::{Expr, ExprKind};
use crate::token::{Span, Token, TokenKind};
use crate::value::Value;

use super::Parser;
use super::error::{ParseError, ParseErrorKind};

impl Parser {
    pub(super) fn parse_expression(&mut self) -> Result<Expr, ParseError> {
        self.parse_assignment()
    }

    /// `assignment → IDENT "=" assignment | logic_or`
    ///
    /// Parses the left-hand side as a normal expression first; if an `=`
    /// follows, only a bare `Variable` is a legal target. An illegal target
    /// is reported but does not abort parsing (per the grammar, this error
    /// is non-fatal — the rest of the statement still parses).
    fn parse_assignment(&mut self) -> Result<Expr, ParseError> {
        let expr = self.parse_or()?;

        if self.match_token(&TokenKind::Equal) {
            let equals = self.previous();
            let value = self.parse_assignment()?;

            if let ExprKind::Variable(name) = expr.kind {
                let span = Span::new(expr.span.start, value.span.end, expr.span.line);
                return Ok(Expr::new(
                    ExprKind::Assign {
                        name,
                        value: Box::new(value),
                    },
                    span,
                ));
            }

            self.errors.push(ParseError::new(
                ParseErrorKind::InvalidAssignmentTarget,
                "Invalid assignment target.",
                equals,
            ));
            return Ok(expr);
        }

        Ok(expr)
    }

    /// `logic_or → logic_and ( "or" logic_and )*`
    fn parse_or(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.parse_and()?;
        while self.check(&TokenKind::Or) {
            let op = self.advance();
            let right = self.parse_and()?;
            let span = Span::new(expr.span.start, right.span.end, expr.span.line);
            expr = Expr::new(
                ExprKind::Logical {
                    left: Box::new(expr),
                    op,
                    right: Box::new(right),
                },
                span,
            );
        }
        Ok(expr)
    }

    /// `logic_and → equality ( "and" equality )*`
    fn parse_and(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.parse_equality()?;
        while self.check(&TokenKind::And) {
            let op = self.advance();
            let right = self.parse_equality()?;
            let span = Span::new(expr.span.start, right.span.end, expr.span.line);
            expr = Expr::new(
                ExprKind::Logical {
                    left: Box::new(expr),
                    op,
                    right: Box::new(right),
                },
                span,
            );
        }
        Ok(expr)
    }

    /// `equality → comparison ( ("!=" | "==") comparison )*`
    fn parse_equality(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.parse_comparison()?;
        while self.check(&TokenKind::BangEqual) || self.check(&TokenKind::EqualEqual) {
            let op = self.advance();
            let right = self.parse_comparison()?;
            expr = Self::binary(expr, op, right);
        }
        Ok(expr)
    }

    /// `comparison → term ( (">" | ">=" | "<" | "<=") term )*`
    fn parse_comparison(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.parse_term()?;
        while self.check(&TokenKind::Greater)
            || self.check(&TokenKind::GreaterEqual)
            || self.check(&TokenKind::Less)
            || self.check(&TokenKind::LessEqual)
        {
            let op = self.advance();
            let right = self.parse_term()?;
            expr = Self::binary(expr, op, right);
        }
        Ok(expr)
    }

    /// `term → factor ( ("-" | "+") factor )*`
    fn parse_term(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.parse_factor()?;
        while self.check(&TokenKind::Minus) || self.check(&TokenKind::Plus) {
            let op = self.advance();
            let right = self.parse_factor()?;
            expr = Self::binary(expr, op, right);
        }
        Ok(expr)
    }

    /// `factor → unary ( ("/" | "*") unary )*`
    fn parse_factor(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.parse_unary()?;
        while self.check(&TokenKind::Slash) || self.check(&TokenKind::Star) {
            let op = self.advance();
            let right = self.parse_unary()?;
            expr = Self::binary(expr, op, right);
        }
        Ok(expr)
    }

    /// `unary → ("!" | "-") unary | call`
    fn parse_unary(&mut self) -> Result<Expr, ParseError> {
        if self.check(&TokenKind::Bang) || self.check(&TokenKind::Minus) {
            let op = self.advance();
            let right = self.parse_unary()?;
            let span = Span::new(op.span.start, right.span.end, op.span.line);
            return Ok(Expr::new(
                ExprKind::Unary {
                    op,
                    right: Box::new(right),
                },
                span,
            ));
        }
        self.parse_call()
    }

    /// `call → primary ( "(" arguments? ")" )*`
    fn parse_call(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.parse_primary()?;
        while self.match_token(&TokenKind::LeftParen) {
            expr = self.finish_call(expr)?;
        }
        Ok(expr)
    }

    fn finish_call(&mut self, callee: Expr) -> Result<Expr, ParseError> {
        let mut args = Vec::new();
        if !self.check(&TokenKind::RightParen) {
            loop {
                if args.len() >= 255 {
                    self.errors.push(ParseError::new(
                        ParseErrorKind::TooManyArguments,
                        "Can't have more than 255 arguments.",
                        self.current(),
                    ));
                }
                args.push(self.parse_expression()?);
                if !self.match_token(&TokenKind::Comma) {
                    break;
                }
            }
        }
        let closing_paren = self.expect(&TokenKind::RightParen, "after arguments")?;
        let span = Span::new(callee.span.start, closing_paren.span.end, callee.span.line);
        Ok(Expr::new(
            ExprKind::Call {
                callee: Box::new(callee),
                closing_paren,
                args,
            },
            span,
        ))
    }

    /// `primary → NUMBER | STRING | "true" | "false" | "nil" | IDENT | "(" expression ")"`
    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        let token = self.current();
        let span = token.span;
        match token.kind {
            TokenKind::Number(n) => {
                self.advance();
                Ok(Expr::new(ExprKind::Literal(Value::Number(n)), span))
            }
            TokenKind::String(ref s) => {
                let value = Value::String(s.as_str().into());
                self.advance();
                Ok(Expr::new(ExprKind::Literal(value), span))
            }
            TokenKind::True => {
                self.advance();
                Ok(Expr::new(ExprKind::Literal(Value::Bool(true)), span))
            }
            TokenKind::False => {
                self.advance();
                Ok(Expr::new(ExprKind::Literal(Value::Bool(false)), span))
            }
            TokenKind::Nil => {
                self.advance();
                Ok(Expr::new(ExprKind::Literal(Value::Nil), span))
            }
            TokenKind::Identifier(_) => {
                let name = self.advance();
                Ok(Expr::new(ExprKind::Variable(name), span))
            }
            TokenKind::LeftParen => {
                self.advance();
                let inner = self.parse_expression()?;
                let closing = self.expect(&TokenKind::RightParen, "after expression")?;
                let span = Span::new(span.start, closing.span.end, span.line);
                Ok(Expr::new(ExprKind::Grouping(Box::new(inner)), span))
            }
            _ => Err(ParseError::new(ParseErrorKind::Expected, "Expect expression.", token)),
        }
    }

    fn binary(left: Expr, op: Token, right: Expr) -> Expr {
        let span = Span::new(left.span.start, right.span.end, left.span.line);
        Expr::new(
            ExprKind::Binary {
                left: Box::new(left),
                op,
                right: Box::new(right),
            },
            span,
        )
    }
}
