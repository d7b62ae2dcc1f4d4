//! Unit tests for parsing.

use super::*;
use crate::ast::{ExprKind, StmtKind};
use crate::lexer::Lexer;

/// Parses `input`, asserting the lexer produced no errors first.
fn parse(input: &str) -> (Vec<Stmt>, Vec<ParseError>) {
    let (tokens, lex_errors) = Lexer::new(input).tokenize();
    assert!(lex_errors.is_empty(), "unexpected lex errors in {input:?}: {lex_errors:?}");
    Parser::new(tokens).parse()
}

fn parse_ok(input: &str) -> Vec<Stmt> {
    let (stmts, errors) = parse(input);
    assert!(errors.is_empty(), "unexpected parse errors in {input:?}: {errors:?}");
    stmts
}

fn parse_single_expr(input: &str) -> ExprKind {
    let stmts = parse_ok(&format!("{input};"));
    assert_eq!(stmts.len(), 1);
    match &stmts[0].kind {
        StmtKind::Expression(expr) => expr.kind.clone(),
        other => panic!("expected an expression statement, got {other:?}"),
    }
}

#[test]
fn empty_program_parses_to_no_statements() {
    assert!(parse_ok("").is_empty());
}

#[test]
fn var_declaration_with_initializer() {
    let stmts = parse_ok("var x = 1;");
    assert_eq!(stmts.len(), 1);
    match &stmts[0].kind {
        StmtKind::Var { name, initializer } => {
            assert_eq!(name.lexeme, "x");
            assert!(initializer.is_some());
        }
        other => panic!("expected a var declaration, got {other:?}"),
    }
}

#[test]
fn var_declaration_without_initializer() {
    let stmts = parse_ok("var x;");
    match &stmts[0].kind {
        StmtKind::Var { initializer, .. } => assert!(initializer.is_none()),
        other => panic!("expected a var declaration, got {other:?}"),
    }
}

#[test]
fn print_statement() {
    let stmts = parse_ok("print 1 + 2;");
    assert!(matches!(stmts[0].kind, StmtKind::Print(_)));
}

#[test]
fn binary_precedence_multiplication_before_addition() {
    match parse_single_expr("1 + 2 * 3") {
        ExprKind::Binary { op, .. } => assert_eq!(op.lexeme, "+"),
        other => panic!("expected a top-level '+', got {other:?}"),
    }
}

#[test]
fn unary_minus_binds_tighter_than_binary_minus() {
    match parse_single_expr("-1 - 2") {
        ExprKind::Binary { left, op, .. } => {
            assert_eq!(op.lexeme, "-");
            assert!(matches!(left.kind, ExprKind::Unary { .. }));
        }
        other => panic!("expected a top-level '-', got {other:?}"),
    }
}

#[test]
fn comparison_and_equality_chain() {
    match parse_single_expr("1 < 2 == true") {
        ExprKind::Binary { op, .. } => assert_eq!(op.lexeme, "=="),
        other => panic!("expected a top-level '==', got {other:?}"),
    }
}

#[test]
fn logical_or_has_lower_precedence_than_and() {
    match parse_single_expr("true or false and false") {
        ExprKind::Logical { op, left, .. } => {
            assert_eq!(op.lexeme, "or");
            assert!(matches!(left.kind, ExprKind::Literal(_)));
        }
        other => panic!("expected a top-level 'or', got {other:?}"),
    }
}

#[test]
fn grouping_overrides_precedence() {
    match parse_single_expr("(1 + 2) * 3") {
        ExprKind::Binary { left, op, .. } => {
            assert_eq!(op.lexeme, "*");
            assert!(matches!(left.kind, ExprKind::Grouping(_)));
        }
        other => panic!("expected a top-level '*', got {other:?}"),
    }
}

#[test]
fn assignment_to_variable_parses_as_assign() {
    match parse_single_expr("x = 5") {
        ExprKind::Assign { name, .. } => assert_eq!(name.lexeme, "x"),
        other => panic!("expected an assignment, got {other:?}"),
    }
}

#[test]
fn assignment_to_non_variable_is_a_parse_error() {
    let (_, errors) = parse("1 + 2 = 3;");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind, ParseErrorKind::InvalidAssignmentTarget);
}

#[test]
fn call_expression_with_arguments() {
    match parse_single_expr("add(1, 2)") {
        ExprKind::Call { args, .. } => assert_eq!(args.len(), 2),
        other => panic!("expected a call, got {other:?}"),
    }
}

#[test]
fn call_with_no_arguments() {
    match parse_single_expr("noop()") {
        ExprKind::Call { args, .. } => assert!(args.is_empty()),
        other => panic!("expected a call, got {other:?}"),
    }
}

#[test]
fn function_declaration_collects_params_and_body() {
    let stmts = parse_ok("fun add(a, b) { return a + b; }");
    match &stmts[0].kind {
        StmtKind::Function(decl) => {
            assert_eq!(decl.name.lexeme, "add");
            assert_eq!(decl.params.len(), 2);
            assert_eq!(decl.body.len(), 1);
        }
        other => panic!("expected a function declaration, got {other:?}"),
    }
}

#[test]
fn if_without_else() {
    let stmts = parse_ok("if (true) print 1;");
    match &stmts[0].kind {
        StmtKind::If { else_branch, .. } => assert!(else_branch.is_none()),
        other => panic!("expected an if statement, got {other:?}"),
    }
}

#[test]
fn if_with_else() {
    let stmts = parse_ok("if (true) print 1; else print 2;");
    match &stmts[0].kind {
        StmtKind::If { else_branch, .. } => assert!(else_branch.is_some()),
        other => panic!("expected an if statement, got {other:?}"),
    }
}

#[test]
fn while_statement() {
    let stmts = parse_ok("while (true) print 1;");
    assert!(matches!(stmts[0].kind, StmtKind::While { .. }));
}

#[test]
fn for_statement_desugars_to_block_with_while() {
    let stmts = parse_ok("for (var i = 0; i < 3; i = i + 1) print i;");
    match &stmts[0].kind {
        StmtKind::Block(body) => {
            assert_eq!(body.len(), 2);
            assert!(matches!(body[0].kind, StmtKind::Var { .. }));
            assert!(matches!(body[1].kind, StmtKind::While { .. }));
        }
        other => panic!("expected a for loop to desugar into a block, got {other:?}"),
    }
}

#[test]
fn for_statement_with_omitted_clauses_defaults_condition_to_true() {
    let stmts = parse_ok("for (;;) print 1;");
    match &stmts[0].kind {
        StmtKind::While { condition, .. } => {
            assert!(matches!(condition.kind, ExprKind::Literal(crate::value::Value::Bool(true))));
        }
        other => panic!("expected a while loop, got {other:?}"),
    }
}

#[test]
fn block_groups_statements() {
    let stmts = parse_ok("{ var x = 1; print x; }");
    match &stmts[0].kind {
        StmtKind::Block(body) => assert_eq!(body.len(), 2),
        other => panic!("expected a block, got {other:?}"),
    }
}

#[test]
fn missing_semicolon_is_a_parse_error() {
    let (_, errors) = parse("var x = 1");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind, ParseErrorKind::Expected);
}

#[test]
fn unclosed_paren_is_a_parse_error() {
    let (_, errors) = parse("print (1 + 2;");
    assert_eq!(errors.len(), 1);
}

#[test]
fn synchronize_recovers_after_a_bad_declaration() {
    let (stmts, errors) = parse("var = 1; print 2;");
    assert_eq!(errors.len(), 1);
    assert_eq!(stmts.len(), 1);
    assert!(matches!(stmts[0].kind, StmtKind::Print(_)));
}

#[test]
fn too_many_arguments_is_reported() {
    let args: Vec<String> = (0..256).map(|i| i.to_string()).collect();
    let src = format!("f({});", args.join(", "));
    let (_, errors) = parse(&src);
    assert!(errors.iter().any(|e| e.kind == ParseErrorKind::TooManyArguments));
}

#[test]
fn too_many_parameters_is_reported_but_the_function_still_parses() {
    let params: Vec<String> = (0..256).map(|i| format!("p{i}")).collect();
    let src = format!("fun f({}) {{ return 1; }}", params.join(", "));
    let (stmts, errors) = parse(&src);
    assert!(errors.iter().any(|e| e.kind == ParseErrorKind::TooManyParameters));
    match &stmts[0].kind {
        StmtKind::Function(decl) => {
            assert_eq!(decl.params.len(), 256);
            assert_eq!(decl.body.len(), 1);
        }
        other => panic!("expected a function declaration, got {other:?}"),
    }
}

#[test]
fn invalid_assignment_target_inside_a_block_does_not_drop_later_statements() {
    let (stmts, errors) = parse("{ 1 = 2; print 3; }");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind, ParseErrorKind::InvalidAssignmentTarget);
    match &stmts[0].kind {
        StmtKind::Block(body) => assert_eq!(body.len(), 2),
        other => panic!("expected a block, got {other:?}"),
    }
}

#[test]
fn error_inside_a_function_body_recovers_without_dropping_later_statements() {
    let (stmts, errors) = parse("fun f() { var = 1; print 2; }");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind, ParseErrorKind::Expected);
    assert_eq!(stmts.len(), 1);
    match &stmts[0].kind {
        StmtKind::Function(decl) => {
            assert_eq!(decl.body.len(), 1);
            assert!(matches!(decl.body[0].kind, StmtKind::Print(_)));
        }
        other => panic!("expected a function declaration, got {other:?}"),
    }
}
