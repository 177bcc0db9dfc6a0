//! Unit tests for the parser module.
//!
//! This module contains tests for the expression grammar:
//! - Numeric literals
//! - Operator precedence and associativity
//! - Grouping
//! - Diagnostic recording and recovery

use pretty_assertions::assert_eq;

use super::lookups::Precedence;
use super::parser::{parse, Parser};
use crate::ast::ast::{Expr, ExprType, ExprWrapper, Stmt, StmtType};
use crate::ast::expressions::{FloatExpr, InfixExpr, IntegerExpr};
use crate::ast::statements::{ExpressionStmt, Program};
use crate::lexer::{lexer::Lexer, tokens::TokenKind};

fn parse_source(source: &str) -> (Parser, Program) {
    parse(Lexer::new(source.to_string()))
}

fn expression_of(program: &Program, index: usize) -> &ExprWrapper {
    let stmt = program.statements[index]
        .as_any()
        .downcast_ref::<ExpressionStmt>()
        .expect("statement should be an expression statement");
    &stmt.expression
}

#[test]
fn test_parse_integer_literal() {
    let (parser, program) = parse_source("42;");

    assert!(parser.errors().is_empty());
    assert_eq!(program.statements.len(), 1);
    assert_eq!(
        program.statements[0].get_stmt_type(),
        StmtType::ExpressionStmt
    );

    let expression = expression_of(&program, 0);
    assert_eq!(expression.get_expr_type(), ExprType::IntegerLiteral);

    let integer = expression
        .as_any()
        .downcast_ref::<IntegerExpr>()
        .expect("expected an integer literal");
    assert_eq!(integer.value, 42);
}

#[test]
fn test_parse_float_literal() {
    let (parser, program) = parse_source("3.14;");

    assert!(parser.errors().is_empty());
    assert_eq!(program.statements.len(), 1);

    let expression = expression_of(&program, 0);
    assert_eq!(expression.get_expr_type(), ExprType::FloatLiteral);

    let float = expression
        .as_any()
        .downcast_ref::<FloatExpr>()
        .expect("expected a float literal");
    assert_eq!(float.value, 3.14);
}

#[test]
fn test_literals_are_never_cross_typed() {
    let (_, program) = parse_source("42; 3.14;");

    assert_eq!(
        expression_of(&program, 0).get_expr_type(),
        ExprType::IntegerLiteral
    );
    assert_eq!(
        expression_of(&program, 1).get_expr_type(),
        ExprType::FloatLiteral
    );
}

#[test]
fn test_operator_precedence() {
    let cases = [
        ("1 + 2 * 3", "(1 + (2 * 3))"),
        ("1 + 2 + 3", "((1 + 2) + 3)"),
        ("1 - 2 - 3", "((1 - 2) - 3)"),
        ("(1 + 2) * 3", "((1 + 2) * 3)"),
        ("1 + 2 * 3 - 4 / 2", "((1 + (2 * 3)) - (4 / 2))"),
        ("5 % 3 * 2", "((5 % 3) * 2)"),
        ("2 * 3 ^ 2", "(2 * (3 ^ 2))"),
        ("2 ^ 3 * 4", "((2 ^ 3) * 4)"),
        ("((2))", "2"),
    ];

    for (source, expected) in cases {
        let (parser, program) = parse_source(source);

        assert!(
            parser.errors().is_empty(),
            "unexpected diagnostics for {:?}: {:?}",
            source,
            parser.errors()
        );
        assert_eq!(program.to_string(), expected, "source: {:?}", source);
    }
}

#[test]
fn test_exponent_is_left_associative() {
    let (parser, program) = parse_source("2 ^ 3 ^ 2");

    assert!(parser.errors().is_empty());
    assert_eq!(program.to_string(), "((2 ^ 3) ^ 2)");
}

#[test]
fn test_unmatched_grouping_is_reported_and_omitted() {
    let (parser, program) = parse_source("(1 + 2");

    assert!(program.statements.is_empty());
    assert_eq!(parser.errors().len(), 1);
    assert_eq!(parser.errors()[0].name(), "UnexpectedToken");
    assert_eq!(
        parser.errors()[0].to_string(),
        "expected next token to be CloseParen, got Eof instead"
    );
}

#[test]
fn test_unknown_expression_start() {
    let (parser, program) = parse_source("+ 1");

    assert_eq!(parser.errors().len(), 1);
    assert_eq!(
        parser.errors()[0].to_string(),
        "no prefix parse function for Plus found"
    );
    // The parser resumes at the next token, so the trailing `1` survives
    assert_eq!(program.statements.len(), 1);
    assert_eq!(program.to_string(), "1");
}

#[test]
fn test_statement_separation() {
    let (parser, program) = parse_source("1 + 2; 3 * 4");

    assert!(parser.errors().is_empty());
    assert_eq!(program.statements.len(), 2);
    assert_eq!(program.statements[0].to_string(), "(1 + 2)");
    assert_eq!(program.statements[1].to_string(), "(3 * 4)");
}

#[test]
fn test_missing_right_operand() {
    let (parser, program) = parse_source("1 +");

    assert_eq!(parser.errors().len(), 1);
    assert_eq!(
        parser.errors()[0].to_string(),
        "no prefix parse function for Eof found"
    );
    assert_eq!(program.statements.len(), 1);

    let expression = expression_of(&program, 0);
    assert_eq!(expression.get_expr_type(), ExprType::Infix);

    let infix = expression
        .as_any()
        .downcast_ref::<InfixExpr>()
        .expect("expected an infix expression");
    assert_eq!(infix.operator, "+");
    assert!(infix.right.is_none());
    assert_eq!(program.to_string(), "(1 + <missing>)");
}

#[test]
fn test_integer_literal_out_of_range() {
    let (parser, program) = parse_source("99999999999999999999;");

    assert!(program.statements.is_empty());
    assert_eq!(parser.errors().len(), 1);
    assert_eq!(parser.errors()[0].name(), "IntegerParseError");
    assert_eq!(
        parser.errors()[0].to_string(),
        "could not parse \"99999999999999999999\" as an integer"
    );
}

#[test]
fn test_illegal_character_degrades_to_diagnostic() {
    let (parser, program) = parse_source("@");

    assert!(program.statements.is_empty());
    assert_eq!(parser.errors().len(), 1);
    assert_eq!(
        parser.errors()[0].to_string(),
        "no prefix parse function for Illegal found"
    );
}

#[test]
fn test_unhandled_statement_tokens_recover() {
    // Declarations are lexed but not part of the expression grammar; the
    // parser reports each unparseable start and keeps going to Eof
    let (parser, program) = parse_source("let x = 5;");

    assert_eq!(parser.errors().len(), 3);
    for diagnostic in parser.errors() {
        assert_eq!(diagnostic.name(), "NoPrefixParseFn");
    }
    assert_eq!(program.statements.len(), 1);
    assert_eq!(program.to_string(), "5");
}

#[test]
fn test_precedence_lookup_is_pure() {
    let (parser, _) = parse_source("");

    assert_eq!(parser.precedence_of(TokenKind::Plus), Precedence::Sum);
    assert_eq!(parser.precedence_of(TokenKind::Plus), Precedence::Sum);
    assert_eq!(parser.precedence_of(TokenKind::Star), Precedence::Product);
    assert_eq!(parser.precedence_of(TokenKind::Caret), Precedence::Exponent);
    assert_eq!(parser.precedence_of(TokenKind::Ident), Precedence::Lowest);
    assert_eq!(parser.precedence_of(TokenKind::Eof), Precedence::Lowest);
}

#[test]
fn test_cursor_priming() {
    let parser = Parser::new(Lexer::new("1 + 2".to_string()));

    assert_eq!(parser.current_token().kind, TokenKind::Int);
    assert_eq!(parser.current_token().literal, "1");
    assert_eq!(parser.peek_token().kind, TokenKind::Plus);
}

#[test]
fn test_cursor_priming_on_empty_source() {
    let parser = Parser::new(Lexer::new("".to_string()));

    assert_eq!(parser.current_token().kind, TokenKind::Eof);
    assert_eq!(parser.peek_token().kind, TokenKind::Eof);
}

#[test]
fn test_parse_empty_program() {
    let (parser, program) = parse_source("");

    assert!(parser.errors().is_empty());
    assert!(program.statements.is_empty());
}
