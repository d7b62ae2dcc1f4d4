//! Statement and declaration parsing.

use std::rc::Rc;

use super::Parser;
use super::error::{ParseError, ParseErrorKind};
use crate::ast::{Expr, ExprKind, FunctionDecl, Stmt, StmtKind};
use crate::token::{Span, TokenKind};
use crate::value::Value;

impl Parser {
    /// `declaration → fun_decl | var_decl | statement`
    ///
    /// The caller is responsible for recovering via
    /// [`synchronize`](Self::synchronize) when this returns an error.
    pub(super) fn parse_declaration(&mut self) -> Result<Stmt, ParseError> {
        if self.check(&TokenKind::Fun) {
            return self.parse_fun_declaration();
        }
        if self.check(&TokenKind::Var) {
            return self.parse_var_declaration();
        }
        self.parse_statement()
    }

    /// `fun_decl → "fun" IDENT "(" parameters? ")" block`
    fn parse_fun_declaration(&mut self) -> Result<Stmt, ParseError> {
        let start = self.current().span;
        self.advance();
        let name = self.expect_identifier("after 'fun'")?;

        self.expect(&TokenKind::LeftParen, "after function name")?;
        let mut params = Vec::new();
        if !self.check(&TokenKind::RightParen) {
            loop {
                if params.len() >= 255 {
                    self.errors.push(ParseError::new(
                        ParseErrorKind::TooManyParameters,
                        "Can't have more than 255 parameters.",
                        self.current(),
                    ));
                }
                params.push(self.expect_identifier("as parameter name")?);
                if !self.match_token(&TokenKind::Comma) {
                    break;
                }
            }
        }
        self.expect(&TokenKind::RightParen, "after parameters")?;

        self.expect(&TokenKind::LeftBrace, "before function body")?;
        let body = self.parse_block_statements()?;
        let end = self.previous().span;

        let span = Span::new(start.start, end.end, start.line);
        Ok(Stmt::new(
            StmtKind::Function(Rc::new(FunctionDecl { name, params, body })),
            span,
        ))
    }

    /// `var_decl → "var" IDENT ( "=" expression )? ";"`
    fn parse_var_declaration(&mut self) -> Result<Stmt, ParseError> {
        let start = self.current().span;
        self.advance();
        let name = self.expect_identifier("after 'var'")?;

        let initializer = if self.match_token(&TokenKind::Equal) {
            Some(self.parse_expression()?)
        } else {
            None
        };

        let end = self.expect(&TokenKind::Semicolon, "after variable declaration")?;
        let span = Span::new(start.start, end.span.end, start.line);
        Ok(Stmt::new(StmtKind::Var { name, initializer }, span))
    }

    /// `statement → expr_stmt | print_stmt | return_stmt | if_stmt | while_stmt | for_stmt | block`
    fn parse_statement(&mut self) -> Result<Stmt, ParseError> {
        match self.current_kind() {
            TokenKind::Print => self.parse_print_statement(),
            TokenKind::Return => self.parse_return_statement(),
            TokenKind::If => self.parse_if_statement(),
            TokenKind::While => self.parse_while_statement(),
            TokenKind::For => self.parse_for_statement(),
            TokenKind::LeftBrace => self.parse_block(),
            _ => self.parse_expression_statement(),
        }
    }

    /// `print_stmt → "print" expression ";"`
    fn parse_print_statement(&mut self) -> Result<Stmt, ParseError> {
        let start = self.current().span;
        self.advance();
        let value = self.parse_expression()?;
        let end = self.expect(&TokenKind::Semicolon, "after value")?;
        let span = Span::new(start.start, end.span.end, start.line);
        Ok(Stmt::new(StmtKind::Print(value), span))
    }

    /// `return_stmt → "return" expression? ";"`
    fn parse_return_statement(&mut self) -> Result<Stmt, ParseError> {
        let keyword = self.current();
        self.advance();

        let value = if self.check(&TokenKind::Semicolon) {
            None
        } else {
            Some(self.parse_expression()?)
        };
        let end = self.expect(&TokenKind::Semicolon, "after return value")?;
        let span = Span::new(keyword.span.start, end.span.end, keyword.span.line);
        Ok(Stmt::new(StmtKind::Return { keyword, value }, span))
    }

    /// `if_stmt → "if" "(" expression ")" statement ( "else" statement )?`
    fn parse_if_statement(&mut self) -> Result<Stmt, ParseError> {
        let start = self.current().span;
        self.advance();
        self.expect(&TokenKind::LeftParen, "after 'if'")?;
        let condition = self.parse_expression()?;
        self.expect(&TokenKind::RightParen, "after if condition")?;

        let then_branch = Box::new(self.parse_statement()?);
        let mut end = then_branch.span;
        let else_branch = if self.match_token(&TokenKind::Else) {
            let branch = self.parse_statement()?;
            end = branch.span;
            Some(Box::new(branch))
        } else {
            None
        };

        let span = Span::new(start.start, end.end, start.line);
        Ok(Stmt::new(
            StmtKind::If {
                condition,
                then_branch,
                else_branch,
            },
            span,
        ))
    }

    /// `while_stmt → "while" "(" expression ")" statement`
    fn parse_while_statement(&mut self) -> Result<Stmt, ParseError> {
        let start = self.current().span;
        self.advance();
        self.expect(&TokenKind::LeftParen, "after 'while'")?;
        let condition = self.parse_expression()?;
        self.expect(&TokenKind::RightParen, "after while condition")?;
        let body = Box::new(self.parse_statement()?);
        let span = Span::new(start.start, body.span.end, start.line);
        Ok(Stmt::new(StmtKind::While { condition, body }, span))
    }

    /// `for_stmt → "for" "(" ( var_decl | expr_stmt | ";" ) expression? ";" expression? ")" statement`
    ///
    /// Desugars entirely into `while`: there is no `StmtKind::For`. A present
    /// increment is appended to the loop body as its own statement; an
    /// absent condition defaults to the literal `true`; a present
    /// initializer wraps the whole loop in a block so its binding is scoped
    /// to the loop alone.
    fn parse_for_statement(&mut self) -> Result<Stmt, ParseError> {
        let start = self.current().span;
        self.advance();
        self.expect(&TokenKind::LeftParen, "after 'for'")?;

        let initializer = if self.match_token(&TokenKind::Semicolon) {
            None
        } else if self.check(&TokenKind::Var) {
            Some(self.parse_var_declaration()?)
        } else {
            Some(self.parse_expression_statement()?)
        };

        let condition = if self.check(&TokenKind::Semicolon) {
            None
        } else {
            Some(self.parse_expression()?)
        };
        self.expect(&TokenKind::Semicolon, "after loop condition")?;

        let increment = if self.check(&TokenKind::RightParen) {
            None
        } else {
            Some(self.parse_expression()?)
        };
        self.expect(&TokenKind::RightParen, "after for clauses")?;

        let mut body = self.parse_statement()?;
        let end = body.span;

        if let Some(increment) = increment {
            let increment_span = increment.span;
            body = Stmt::new(
                StmtKind::Block(vec![body, Stmt::new(StmtKind::Expression(increment), increment_span)]),
                Span::new(start.start, end.end, start.line),
            );
        }

        let condition = condition.unwrap_or_else(|| Expr::new(ExprKind::Literal(Value::Bool(true)), start));
        body = Stmt::new(
            StmtKind::While {
                condition,
                body: Box::new(body),
            },
            Span::new(start.start, end.end, start.line),
        );

        if let Some(initializer) = initializer {
            body = Stmt::new(
                StmtKind::Block(vec![initializer, body]),
                Span::new(start.start, end.end, start.line),
            );
        }

        Ok(body)
    }

    /// `block → "{" declaration* "}"`
    fn parse_block(&mut self) -> Result<Stmt, ParseError> {
        let start = self.current().span;
        self.advance();
        let statements = self.parse_block_statements()?;
        let end = self.previous().span;
        let span = Span::new(start.start, end.end, start.line);
        Ok(Stmt::new(StmtKind::Block(statements), span))
    }

    /// Parses declarations up to (and consuming) the closing `}`. Shared by
    /// [`parse_block`](Self::parse_block) and function bodies, which need
    /// the raw `Vec<Stmt>` rather than a wrapping `Stmt::Block`.
    ///
    /// A declaration that fails to parse is recorded and skipped, exactly
    /// like [`Parser::parse`]'s own loop: `synchronize` realigns at the next
    /// plausible declaration boundary and the loop keeps going, so one bad
    /// declaration doesn't discard the rest of the block.
    fn parse_block_statements(&mut self) -> Result<Vec<Stmt>, ParseError> {
        let mut statements = Vec::new();
        while !self.check(&TokenKind::RightBrace) && !self.is_eof() {
            match self.parse_declaration() {
                Ok(stmt) => statements.push(stmt),
                Err(err) => {
                    self.errors.push(err);
                    self.synchronize();
                }
            }
        }
        self.expect(&TokenKind::RightBrace, "after block")?;
        Ok(statements)
    }

    /// `expr_stmt → expression ";"`
    fn parse_expression_statement(&mut self) -> Result<Stmt, ParseError> {
        let expr = self.parse_expression()?;
        let end = self.expect(&TokenKind::Semicolon, "after expression")?;
        let span = Span::new(expr.span.start, end.span.end, expr.span.line);
        Ok(Stmt::new(StmtKind::Expression(expr), span))
    }
}
