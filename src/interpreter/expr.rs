//! Expression evaluation.

use std::io::Write;

use crate::ast::{Expr, ExprKind};
use crate::runtime_error::RuntimeError;
use crate::token::TokenKind;
use crate::value::Value;

use super::Interpreter;

impl Interpreter {
    pub(super) fn evaluate(&mut self, expr: &Expr, out: &mut dyn Write) -> Result<Value, RuntimeError> {
        match &expr.kind {
            ExprKind::Literal(value) => Ok(value.clone()),
            ExprKind::Grouping(inner) => self.evaluate(inner, out),
            ExprKind::Variable(name) => self.environment.get(name),
            ExprKind::Assign { name, value } => {
                let value = self.evaluate(value, out)?;
                self.environment.assign(name, value.clone())?;
                Ok(value)
            }
            ExprKind::Unary { op, right } => self.evaluate_unary(op, right, out),
            ExprKind::Binary { left, op, right } => self.evaluate_binary(left, op, right, out),
            ExprKind::Logical { left, op, right } => self.evaluate_logical(left, op, right, out),
            ExprKind::Call {
                callee,
                closing_paren,
                args,
            } => self.evaluate_call(callee, closing_paren, args, out),
        }
    }

    fn evaluate_unary(
        &mut self,
        op: &crate::token::Token,
        right: &Expr,
        out: &mut dyn Write,
    ) -> Result<Value, RuntimeError> {
        let right = self.evaluate(right, out)?;
        match op.kind {
            TokenKind::Minus => match right {
                Value::Number(n) => Ok(Value::Number(-n)),
                _ => Err(RuntimeError::type_mismatch("Operand must be a number.", op.span)),
            },
            TokenKind::Bang => Ok(Value::Bool(!right.is_truthy())),
            _ => unreachable!("parser only produces Unary with Minus or Bang"),
        }
    }

    fn evaluate_binary(
        &mut self,
        left: &Expr,
        op: &crate::token::Token,
        right: &Expr,
        out: &mut dyn Write,
    ) -> Result<Value, RuntimeError> {
        let left = self.evaluate(left, out)?;
        let right = self.evaluate(right, out)?;

        match op.kind {
            TokenKind::Plus => match (left, right) {
                (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),
                (Value::String(a), Value::String(b)) => Ok(Value::String(format!("{a}{b}").into())),
                _ => Err(RuntimeError::type_mismatch(
                    "Operands must be two numbers or two strings.",
                    op.span,
                )),
            },
            TokenKind::Minus => Self::numeric(left, right, op.span, |a, b| a - b),
            TokenKind::Star => Self::numeric(left, right, op.span, |a, b| a * b),
            TokenKind::Slash => Self::numeric(left, right, op.span, |a, b| a / b),
            TokenKind::Greater => Self::comparison(left, right, op.span, |a, b| a > b),
            TokenKind::GreaterEqual => Self::comparison(left, right, op.span, |a, b| a >= b),
            TokenKind::Less => Self::comparison(left, right, op.span, |a, b| a < b),
            TokenKind::LessEqual => Self::comparison(left, right, op.span, |a, b| a <= b),
            TokenKind::EqualEqual => Ok(Value::Bool(left == right)),
            TokenKind::BangEqual => Ok(Value::Bool(left != right)),
            _ => unreachable!("parser only produces Binary with an arithmetic/comparison/equality operator"),
        }
    }

    fn numeric(
        left: Value,
        right: Value,
        span: crate::token::Span,
        op: impl Fn(f64, f64) -> f64,
    ) -> Result<Value, RuntimeError> {
        match (left, right) {
            (Value::Number(a), Value::Number(b)) => Ok(Value::Number(op(a, b))),
            _ => Err(RuntimeError::type_mismatch("Operands must be numbers.", span)),
        }
    }

    fn comparison(
        left: Value,
        right: Value,
        span: crate::token::Span,
        op: impl Fn(f64, f64) -> bool,
    ) -> Result<Value, RuntimeError> {
        match (left, right) {
            (Value::Number(a), Value::Number(b)) => Ok(Value::Bool(op(a, b))),
            _ => Err(RuntimeError::type_mismatch("Operands must be numbers.", span)),
        }
    }

    fn evaluate_logical(
        &mut self,
        left: &Expr,
        op: &crate::token::Token,
        right: &Expr,
        out: &mut dyn Write,
    ) -> Result<Value, RuntimeError> {
        let left = self.evaluate(left, out)?;
        match op.kind {
            TokenKind::Or if left.is_truthy() => Ok(left),
            TokenKind::And if !left.is_truthy() => Ok(left),
            _ => self.evaluate(right, out),
        }
    }

    fn evaluate_call(
        &mut self,
        callee: &Expr,
        closing_paren: &crate::token::Token,
        args: &[Expr],
        out: &mut dyn Write,
    ) -> Result<Value, RuntimeError> {
        let callee = self.evaluate(callee, out)?;

        let mut values = Vec::with_capacity(args.len());
        for arg in args {
            values.push(self.evaluate(arg, out)?);
        }

        let function = match callee {
            Value::Function(function) => function,
            _ => return Err(RuntimeError::not_callable(closing_paren.span)),
        };

        if values.len() != function.arity() {
            return Err(RuntimeError::arity_mismatch(
                function.arity(),
                values.len(),
                closing_paren.span,
            ));
        }

        self.call_function(&function, values, out)
    }
}
