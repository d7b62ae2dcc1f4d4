//! Statement execution and function invocation.

use std::io::Write;
use std::rc::Rc;

use crate::ast::{Stmt, StmtKind};
use crate::environment::Environment;
use crate::runtime_error::RuntimeError;
use crate::value::{LoxFunction, Value};

use super::{ExecutionSignal, Interpreter};

impl Interpreter {
    pub(super) fn execute(&mut self, stmt: &Stmt, out: &mut dyn Write) -> Result<ExecutionSignal, RuntimeError> {
        match &stmt.kind {
            StmtKind::Expression(expr) => {
                self.evaluate(expr, out)?;
                Ok(ExecutionSignal::Normal)
            }
            StmtKind::Print(expr) => {
                let value = self.evaluate(expr, out)?;
                // A failed write to the output sink is not a Lox-level
                // failure; there is no sensible diagnostic to surface for it.
                let _ = writeln!(out, "{}", value.stringify());
                Ok(ExecutionSignal::Normal)
            }
            StmtKind::Var { name, initializer } => {
                let value = match initializer {
                    Some(expr) => self.evaluate(expr, out)?,
                    None => Value::Nil,
                };
                self.environment.define(&name.lexeme, value);
                Ok(ExecutionSignal::Normal)
            }
            StmtKind::Block(statements) => {
                let enclosing = self.environment.child();
                self.execute_block(statements, enclosing, out)
            }
            StmtKind::If {
                condition,
                then_branch,
                else_branch,
            } => {
                if self.evaluate(condition, out)?.is_truthy() {
                    self.execute(then_branch, out)
                } else if let Some(else_branch) = else_branch {
                    self.execute(else_branch, out)
                } else {
                    Ok(ExecutionSignal::Normal)
                }
            }
            StmtKind::While { condition, body } => {
                while self.evaluate(condition, out)?.is_truthy() {
                    match self.execute(body, out)? {
                        ExecutionSignal::Normal => {}
                        signal @ ExecutionSignal::Return(_) => return Ok(signal),
                    }
                }
                Ok(ExecutionSignal::Normal)
            }
            StmtKind::Function(declaration) => {
                let function = LoxFunction::new(Rc::clone(declaration), self.environment.clone());
                self.environment
                    .define(&declaration.name.lexeme, Value::Function(Rc::new(function)));
                Ok(ExecutionSignal::Normal)
            }
            StmtKind::Return { value, .. } => {
                let value = match value {
                    Some(expr) => self.evaluate(expr, out)?,
                    None => Value::Nil,
                };
                Ok(ExecutionSignal::Return(value))
            }
        }
    }

    /// Executes `statements` in `environment`, restoring the interpreter's
    /// previous environment before returning — including when a statement
    /// errors or returns early, so a failure partway through a block never
    /// leaves the interpreter pointed at a scope it has already left.
    pub(super) fn execute_block(
        &mut self,
        statements: &[Stmt],
        environment: Environment,
        out: &mut dyn Write,
    ) -> Result<ExecutionSignal, RuntimeError> {
        let previous = std::mem::replace(&mut self.environment, environment);

        let mut result = Ok(ExecutionSignal::Normal);
        for stmt in statements {
            match self.execute(stmt, out) {
                Ok(ExecutionSignal::Normal) => {}
                Ok(signal @ ExecutionSignal::Return(_)) => {
                    result = Ok(signal);
                    break;
                }
                Err(err) => {
                    result = Err(err);
                    break;
                }
            }
        }

        self.environment = previous;
        result
    }

    /// Invokes a user-defined function: a fresh child of its closure
    /// environment, one binding per parameter, then its body run as a
    /// block. A `return` inside the body yields that value; falling off
    /// the end yields `nil`.
    pub(super) fn call_function(
        &mut self,
        function: &LoxFunction,
        args: Vec<Value>,
        out: &mut dyn Write,
    ) -> Result<Value, RuntimeError> {
        let call_environment = function.closure.child();
        for (param, arg) in function.declaration.params.iter().zip(args) {
            call_environment.define(&param.lexeme, arg);
        }

        match self.execute_block(&function.declaration.body, call_environment, out)? {
            ExecutionSignal::Return(value) => Ok(value),
            ExecutionSignal::Normal => Ok(Value::Nil),
        }
    }
}
